// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/export/serial.rs
//
// Serial numbering of exported cards.

use crate::domain::error::ExportError;

/// Hands out contiguous serial numbers during one export run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerialCounter {
    first: i64,
    last: Option<i64>,
}

impl SerialCounter {
    pub fn new(start: i64) -> Self {
        Self {
            first: start,
            last: None,
        }
    }

    /// Parse the starting value as typed by the user.
    pub fn parse(input: &str) -> Result<Self, ExportError> {
        input
            .trim()
            .parse::<i64>()
            .map(Self::new)
            .map_err(|_| ExportError::InvalidSerial(input.to_string()))
    }

    /// Take the next number. Fails once the numbers run past `i64::MAX`.
    pub fn issue(&mut self) -> Result<i64, ExportError> {
        let serial = match self.last {
            None => self.first,
            Some(last) => last
                .checked_add(1)
                .ok_or(ExportError::SerialOverflow(last))?,
        };
        self.last = Some(serial);
        Ok(serial)
    }

    pub fn first(&self) -> i64 {
        self.first
    }

    /// Last issued serial, if any.
    pub fn last(&self) -> Option<i64> {
        self.last
    }
}

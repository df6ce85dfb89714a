// *******************************************************************************
// Copyright (c) 2026 Contributors to the Eclipse Foundation
//
// See the NOTICE file(s) distributed with this work for additional
// information regarding copyright ownership.
//
// This program and the accompanying materials are made available under the
// terms of the Apache License Version 2.0 which is available at
// <https://www.apache.org/licenses/LICENSE-2.0>
//
// SPDX-License-Identifier: Apache-2.0
// *******************************************************************************

/// Format and write informational message using a
/// [`TaggedLogger`](crate::tagged_logger::TaggedLogger).
#[macro_export]
macro_rules! tlog_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_info(&format!($($arg)+))
    };
}

/// Format and write warning message using a [`TaggedLogger`](crate::tagged_logger::TaggedLogger).
#[macro_export]
macro_rules! tlog_warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_warning(&format!($($arg)+))
    };
}

/// Format and write error message using a [`TaggedLogger`](crate::tagged_logger::TaggedLogger).
#[macro_export]
macro_rules! tlog_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.log_error(&format!($($arg)+))
    };
}

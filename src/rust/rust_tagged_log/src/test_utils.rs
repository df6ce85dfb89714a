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
//! Shared helpers for tests touching process-wide state.

use crate::build_mode::clear_build_mode;
use crate::sink::reset_default_sink;
use crate::sink_registry::reset_registry;
use std::sync::{LazyLock, Mutex, MutexGuard, PoisonError};

/// Serial test execution mutex.
static SERIAL_TEST: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Execute test serially with build mode, default sink and registry reset.
pub(crate) fn lock_and_reset<'a>() -> MutexGuard<'a, ()> {
    // A failed test must not block the remaining ones.
    let serial_lock: MutexGuard<'a, ()> =
        SERIAL_TEST.lock().unwrap_or_else(PoisonError::into_inner);

    clear_build_mode();
    reset_default_sink();
    reset_registry();

    serial_lock
}

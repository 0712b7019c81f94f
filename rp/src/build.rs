/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");

const BUILD_TARGET: &str = env!("RP_BUILD_TARGET");
const BUILD_PROFILE: &str = env!("RP_BUILD_PROFILE");
const BUILD_OPT_LEVEL: &str = env!("RP_BUILD_OPT_LEVEL");
const BUILD_DEBUG: &str = env!("RP_BUILD_DEBUG");

const PACKAGE_VERSION: Option<&str> = option_env!("RP_PACKAGE_VERSION");

const LOG_RAW_IO_FEATURE: Option<&str> = option_env!("RP_LOG_RAW_IO_FEATURE");

pub fn print_version() {
    println!("{PKG_NAME} {VERSION}");
    print!("Features:");
    if let Some(log_raw_io) = LOG_RAW_IO_FEATURE {
        print!(" {log_raw_io}");
    }
    println!();
    println!("Target: {BUILD_TARGET}");
    println!("Profile: {BUILD_PROFILE}, Opt Level: {BUILD_OPT_LEVEL}, Debug: {BUILD_DEBUG}");
    if let Some(package_version) = PACKAGE_VERSION {
        println!("Package Version: {package_version}");
    }
}

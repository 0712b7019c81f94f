/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::env;

fn main() {
    for (var, name) in [
        ("TARGET", "RP_BUILD_TARGET"),
        ("PROFILE", "RP_BUILD_PROFILE"),
        ("OPT_LEVEL", "RP_BUILD_OPT_LEVEL"),
        ("DEBUG", "RP_BUILD_DEBUG"),
    ] {
        let value = env::var(var).unwrap_or_default();
        println!("cargo:rustc-env={name}={value}");
    }

    if let Ok(v) = env::var("RP_PACKAGE_VERSION") {
        println!("cargo:rustc-env=RP_PACKAGE_VERSION={v}");
    }
    println!("cargo:rerun-if-env-changed=RP_PACKAGE_VERSION");

    if env::var("CARGO_FEATURE_LOG_RAW_IO").is_ok() {
        println!("cargo:rustc-env=RP_LOG_RAW_IO_FEATURE=log-raw-io");
    }
}

/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgMatches, Command};
use clap_complete::Shell;
use log::info;

use rp::PageRetriever;
use rp::logger::SyncLogger;
use rp::opts::{ARG_COMPLETION, ARG_VERSION};

fn build_cli_args() -> Command {
    rp::add_args(Command::new(rp::build::PKG_NAME))
}

fn main() -> anyhow::Result<ExitCode> {
    let args = build_cli_args().get_matches();

    if args.contains_id(ARG_COMPLETION) {
        generate_completion(&args);
        return Ok(ExitCode::SUCCESS);
    }
    if args.get_flag(ARG_VERSION) {
        rp::build::print_version();
        return Ok(ExitCode::SUCCESS);
    }

    SyncLogger::new(rp::opts::verbose_level(&args))
        .into_global_logger()
        .context("failed to setup logger")?;

    let proc_args = rp::parse_args(&args)?;
    proc_args.summary();

    let resolver = proc_args.build_resolver();
    let mut retriever = PageRetriever::new(resolver, proc_args.query_strategy);
    let summary = retriever.retrieve_all(&proc_args.endpoints, &proc_args.outputs);
    info!(
        "retrieved {}/{} pages, {} body bytes over {} connections",
        summary.retrieved_pages, summary.total_pages, summary.body_bytes, summary.connections
    );

    if summary.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn generate_completion(args: &ArgMatches) {
    if let Some(target) = args.get_one::<Shell>(ARG_COMPLETION) {
        let mut app = build_cli_args();
        let bin_name = app.get_name().to_string();
        clap_complete::generate(*target, &mut app, bin_name, &mut io::stdout());
    }
}

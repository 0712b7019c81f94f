/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use clap_complete::Shell;
use log::{debug, info, warn};

use rp_socket::{StaticResolver, SystemResolver};
use rp_types::net::QueryStrategy;
use rp_types::url::{Endpoint, decode_url};

use crate::output::OutputDest;

const ARG_URL: &str = "url";
const ARG_OUTPUT: &str = "output";
const ARG_IPV4: &str = "ipv4";
const ARG_IPV6: &str = "ipv6";
const ARG_VERBOSE: &str = "verbose";
const ARG_RESOLVE: &str = "resolve";
pub const ARG_VERSION: &str = "version";
pub const ARG_COMPLETION: &str = "completion";

#[derive(Debug)]
pub struct ProcArgs {
    pub endpoints: Vec<Endpoint>,
    pub outputs: Vec<OutputDest>,
    pub query_strategy: QueryStrategy,
    pub verbose_level: u8,
    resolve_records: Vec<(String, u16, IpAddr)>,
}

impl ProcArgs {
    pub fn build_resolver(&self) -> StaticResolver<SystemResolver> {
        let mut resolver = StaticResolver::new(SystemResolver::default());
        for (host, port, ip) in &self.resolve_records {
            resolver.insert(host, *port, *ip);
        }
        resolver
    }

    pub fn summary(&self) {
        info!("verbose mode enabled");
        debug!("query strategy: {}", self.query_strategy);
        for (i, endpoint) in self.endpoints.iter().enumerate() {
            let dest = self.outputs.get(i).cloned().unwrap_or_default();
            debug!("{endpoint} -> {dest}");
        }
        if self.outputs.len() > self.endpoints.len() {
            debug!(
                "{} output files given but only {} urls",
                self.outputs.len(),
                self.endpoints.len()
            );
        }
    }
}

pub fn add_args(cmd: Command) -> Command {
    cmd.disable_version_flag(true)
        .arg(
            Arg::new(ARG_URL)
                .help("Pages to retrieve, in order")
                .value_name("URL")
                .num_args(1..)
                .required_unless_present_any([ARG_VERSION, ARG_COMPLETION]),
        )
        .arg(
            Arg::new(ARG_OUTPUT)
                .help("Output file for the page with the same position, stdout if not given")
                .value_name("FILE")
                .short('o')
                .long(ARG_OUTPUT)
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(ARG_IPV4)
                .help("Use IPv4 addresses only")
                .short('4')
                .long(ARG_IPV4)
                .action(ArgAction::SetTrue)
                .conflicts_with(ARG_IPV6),
        )
        .arg(
            Arg::new(ARG_IPV6)
                .help("Use IPv6 addresses only")
                .short('6')
                .long(ARG_IPV6)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_VERBOSE)
                .help("Show verbose message")
                .short('v')
                .long(ARG_VERBOSE)
                .num_args(0)
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new(ARG_RESOLVE)
                .help("Provide a custom address for a specific host and port pair")
                .value_name("host:port:addr")
                .long(ARG_RESOLVE)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new(ARG_VERSION)
                .help("Show version")
                .short('V')
                .long(ARG_VERSION)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(ARG_COMPLETION)
                .num_args(1)
                .value_name("SHELL")
                .long(ARG_COMPLETION)
                .value_parser(value_parser!(Shell))
                .exclusive(true),
        )
}

fn parse_url(s: &str) -> anyhow::Result<Endpoint> {
    let decoded = decode_url(s)?;
    let endpoint = Endpoint::from_str(&decoded)?;
    if !endpoint.is_http() {
        return Err(anyhow!("unsupported scheme {}", endpoint.scheme()));
    }
    if endpoint.username().is_some() || endpoint.password().is_some() {
        warn!("credentials in url {endpoint} are not sent");
    }
    Ok(endpoint)
}

fn parse_resolve_value(v: &str) -> anyhow::Result<(String, u16, IpAddr)> {
    let (upstream, ip) = match v.strip_suffix(']') {
        Some(s) => {
            let p = s
                .rfind('[')
                .ok_or_else(|| anyhow!("unclosed ipv6 address"))?;
            let upstream = s[..p]
                .strip_suffix(':')
                .ok_or_else(|| anyhow!("no ip field found"))?;
            (upstream, &s[p + 1..])
        }
        None => v
            .rsplit_once(':')
            .ok_or_else(|| anyhow!("no ip field found"))?,
    };
    let (host, port) = upstream
        .rsplit_once(':')
        .ok_or_else(|| anyhow!("no port field found"))?;

    let host = host.trim_start_matches('[').trim_end_matches(']');
    if host.is_empty() {
        return Err(anyhow!("empty host"));
    }
    let port = u16::from_str(port).map_err(|e| anyhow!("invalid port: {e}"))?;
    let ip = IpAddr::from_str(ip).map_err(|e| anyhow!("invalid ip address: {e}"))?;
    Ok((host.to_string(), port, ip))
}

pub fn verbose_level(args: &ArgMatches) -> u8 {
    args.get_one::<u8>(ARG_VERBOSE).copied().unwrap_or_default()
}

pub fn parse_args(args: &ArgMatches) -> anyhow::Result<ProcArgs> {
    let query_strategy = QueryStrategy::from_flags(args.get_flag(ARG_IPV4), args.get_flag(ARG_IPV6))
        .ok_or_else(|| anyhow!("cannot specify IPv4 only and IPv6 only"))?;

    let mut endpoints = Vec::new();
    if let Some(values) = args.get_many::<String>(ARG_URL) {
        for v in values {
            let endpoint = parse_url(v).context(format!("invalid url {v}"))?;
            endpoints.push(endpoint);
        }
    }
    if endpoints.is_empty() {
        return Err(anyhow!("must specify at least one url"));
    }

    let outputs = args
        .get_many::<PathBuf>(ARG_OUTPUT)
        .map(|values| values.map(|p| OutputDest::File(p.clone())).collect())
        .unwrap_or_default();

    let mut resolve_records = Vec::new();
    if let Some(values) = args.get_many::<String>(ARG_RESOLVE) {
        for v in values {
            let record = parse_resolve_value(v).context(format!("invalid resolve string {v}"))?;
            resolve_records.push(record);
        }
    }

    Ok(ProcArgs {
        endpoints,
        outputs,
        query_strategy,
        verbose_level: verbose_level(args),
        resolve_records,
    })
}

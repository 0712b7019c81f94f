/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::io::{self, IsTerminal, Write};

use anstyle::{AnsiColor, Color, Style};
use chrono::Local;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Writes log records to stderr, in the caller's thread.
pub struct SyncLogger {
    level: LevelFilter,
    console: bool,
}

impl SyncLogger {
    pub fn new(verbose_level: u8) -> Self {
        let level = match verbose_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        SyncLogger {
            level,
            console: io::stderr().is_terminal(),
        }
    }

    pub fn into_global_logger(self) -> Result<(), SetLoggerError> {
        let level = self.level;
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(level);
        Ok(())
    }

    fn write_plain<W: Write>(&self, w: &mut W, record: &Record) -> io::Result<()> {
        let datetime = Local::now();
        write!(w, "{}", datetime.format(TIME_FORMAT))?;
        write!(w, " {}", record.level())?;
        writeln!(w, " {}", record.args())
    }

    fn write_console<W: Write>(&self, w: &mut W, record: &Record) -> io::Result<()> {
        const COLOR_RED: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));
        const COLOR_YELLOW: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));
        const COLOR_GREEN: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));
        const COLOR_CYAN: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan)));
        const COLOR_BLUE: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue)));
        const STYLE_BOLD: Style = Style::new().bold();

        let datetime = Local::now();
        write!(w, "{}", datetime.format(TIME_FORMAT))?;
        let level_color = match record.level() {
            Level::Error => COLOR_RED,
            Level::Warn => COLOR_YELLOW,
            Level::Info => COLOR_GREEN,
            Level::Debug => COLOR_CYAN,
            Level::Trace => COLOR_BLUE,
        };
        write!(
            w,
            " {}{}{}",
            level_color.render(),
            record.level(),
            level_color.render_reset(),
        )?;
        writeln!(
            w,
            " {}{}{}",
            STYLE_BOLD.render(),
            record.args(),
            STYLE_BOLD.render_reset()
        )
    }
}

impl Log for SyncLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let mut buf: Vec<u8> = Vec::with_capacity(256);
        let r = if self.console {
            self.write_console(&mut buf, record)
        } else {
            self.write_plain(&mut buf, record)
        };
        if r.is_ok() {
            let mut stderr = io::stderr().lock();
            let _ = stderr.write_all(&buf);
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

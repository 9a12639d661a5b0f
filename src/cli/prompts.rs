// ABOUTME: Line-based prompt helpers over an explicit input reader
// ABOUTME: Re-prompts until the operator supplies a parseable value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Clinic Manager

//! `Prompter` owns the input reader and output sink for one session, so no
//! process-wide input state exists. Tests drive it with in-memory buffers.

use chrono::{NaiveDate, NaiveTime};
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};

use crate::models::MedicationStatus;

/// Prompt reader/writer pair for one interactive session
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<BufReader<Stdin>, Stdout> {
    /// Prompter over the process's stdin/stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    #[must_use]
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Write a line to the output sink.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn read_trimmed(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input stream closed",
            ));
        }
        Ok(line.trim().to_owned())
    }

    /// Read an integer, re-prompting until one parses.
    pub fn read_i64(&mut self, prompt: &str) -> io::Result<i64> {
        loop {
            let line = self.read_trimmed(prompt)?;
            match line.parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Please enter a valid integer.")?,
            }
        }
    }

    /// Read a non-negative decimal, re-prompting until one parses.
    pub fn read_non_negative_f64(&mut self, prompt: &str) -> io::Result<f64> {
        loop {
            let line = self.read_trimmed(prompt)?;
            match line.parse::<f64>() {
                Ok(value) if value >= 0.0 => return Ok(value),
                Ok(_) => self.say("Value must be non-negative.")?,
                Err(_) => self.say("Please enter a valid number.")?,
            }
        }
    }

    /// Read a non-empty line, re-prompting on blank input.
    pub fn read_non_empty(&mut self, prompt: &str) -> io::Result<String> {
        loop {
            let line = self.read_trimmed(prompt)?;
            if line.is_empty() {
                self.say("Input cannot be empty.")?;
            } else {
                return Ok(line);
            }
        }
    }

    /// Read an optional integer. Empty input means none; unparseable input
    /// is reported and also treated as none.
    pub fn read_optional_i64(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        let line = self.read_trimmed(prompt)?;
        if line.is_empty() {
            return Ok(None);
        }
        match line.parse() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                self.say("Invalid number, leaving it empty.")?;
                Ok(None)
            }
        }
    }

    /// Read a calendar date in `YYYY-MM-DD` form.
    pub fn read_date(&mut self, prompt: &str) -> io::Result<NaiveDate> {
        loop {
            let line = self.read_trimmed(prompt)?;
            match NaiveDate::parse_from_str(&line, "%Y-%m-%d") {
                Ok(date) => return Ok(date),
                Err(_) => self.say("Please use the YYYY-MM-DD format.")?,
            }
        }
    }

    /// Read a time of day in `HH:MM:SS` form.
    pub fn read_time(&mut self, prompt: &str) -> io::Result<NaiveTime> {
        loop {
            let line = self.read_trimmed(prompt)?;
            match NaiveTime::parse_from_str(&line, "%H:%M:%S") {
                Ok(time) => return Ok(time),
                Err(_) => self.say("Please use the HH:MM:SS format.")?,
            }
        }
    }

    /// Read a medication status, re-prompting until one parses.
    pub fn read_status(&mut self, prompt: &str) -> io::Result<MedicationStatus> {
        loop {
            let line = self.read_trimmed(prompt)?;
            match line.parse() {
                Ok(status) => return Ok(status),
                Err(message) => self.say(&format!("{message}."))?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output_of(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_output()).unwrap()
    }

    #[test]
    fn read_i64_retries_until_valid() {
        let mut p = prompter("abc\n\n42\n");
        assert_eq!(p.read_i64("n: ").unwrap(), 42);
        let out = output_of(p);
        assert!(out.contains("Please enter a valid integer."));
    }

    #[test]
    fn read_i64_fails_on_eof() {
        let mut p = prompter("");
        let err = p.read_i64("n: ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn read_non_negative_f64_rejects_negatives() {
        let mut p = prompter("-3\n12.5\n");
        assert!((p.read_non_negative_f64("cost: ").unwrap() - 12.5).abs() < f64::EPSILON);
        let out = output_of(p);
        assert!(out.contains("Value must be non-negative."));
    }

    #[test]
    fn read_non_empty_skips_blank_lines() {
        let mut p = prompter("\n   \nAspirin\n");
        assert_eq!(p.read_non_empty("name: ").unwrap(), "Aspirin");
    }

    #[test]
    fn read_optional_i64_maps_empty_to_none() {
        let mut p = prompter("\n");
        assert_eq!(p.read_optional_i64("plan: ").unwrap(), None);
    }

    #[test]
    fn read_optional_i64_parses_values_and_tolerates_garbage() {
        let mut p = prompter("7\n");
        assert_eq!(p.read_optional_i64("plan: ").unwrap(), Some(7));

        let mut p = prompter("seven\n");
        assert_eq!(p.read_optional_i64("plan: ").unwrap(), None);
        assert!(output_of(p).contains("Invalid number"));
    }

    #[test]
    fn read_date_and_time_parse_iso_forms() {
        let mut p = prompter("2026-03-14\n");
        assert_eq!(
            p.read_date("date: ").unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
        );

        let mut p = prompter("not-a-time\n09:30:00\n");
        assert_eq!(
            p.read_time("time: ").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
    }

    #[test]
    fn read_status_retries_until_valid() {
        let mut p = prompter("sometimes\npaused\n");
        assert_eq!(p.read_status("status: ").unwrap(), MedicationStatus::Paused);
    }
}

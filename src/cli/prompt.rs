//! Interactive prompts.
//!
//! This is intentionally kept separate from clap parsing:
//! - clap handles flags for scripted, one-shot runs
//! - the prompter provides the "enter a date, then go again?" loop
//!
//! The prompter is generic over its input/output so the loop can be driven
//! from tests.

use std::io::{BufRead, Write};

use crate::domain::{DAY_RANGE, MONTH_RANGE, SurveyDate, YEAR_RANGE};
use crate::error::AppError;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for day, month and year in turn, re-asking each until it is valid.
    pub fn ask_date(&mut self) -> Result<SurveyDate, AppError> {
        let day = self.ask_in_range(
            "Please enter the day of the survey in the format DD: ",
            i64::from(DAY_RANGE.0)..=i64::from(DAY_RANGE.1),
            "Out of range - values must be in the range 1 and 31.",
        )?;
        let month = self.ask_in_range(
            "Please enter the month of the survey in the format MM: ",
            i64::from(MONTH_RANGE.0)..=i64::from(MONTH_RANGE.1),
            "Out of range - values must be in the range 1 to 12.",
        )?;
        let year = self.ask_in_range(
            "Please enter the year of the survey in the format YYYY: ",
            i64::from(YEAR_RANGE.0)..=i64::from(YEAR_RANGE.1),
            "Out of range - values must range from 2000 and 2024.",
        )?;

        // Each component was range-checked above.
        SurveyDate::new(day as u32, month as u32, year as i32)
            .ok_or_else(|| AppError::prompt(format!("Invalid survey date {day:02}/{month:02}/{year}.")))
    }

    /// `true` to process another date, `false` to quit.
    pub fn ask_continue(&mut self) -> Result<bool, AppError> {
        loop {
            let answer = self.read_answer("Do you want to select a data file for a different date? (Y/N): ")?;
            match answer.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => {
                    self.say("Exiting the program. Thank you!")?;
                    return Ok(false);
                }
                _ => self.say("Invalid input. Please enter 'Y' to continue or 'N' to quit.")?,
            }
        }
    }

    /// The output stream, for writing reports between prompts.
    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print a line through the prompter's output.
    pub fn say(&mut self, line: &str) -> Result<(), AppError> {
        writeln!(self.output, "{line}").map_err(|e| AppError::prompt(format!("Failed to write prompt: {e}")))
    }

    fn ask_in_range(
        &mut self,
        question: &str,
        range: std::ops::RangeInclusive<i64>,
        out_of_range: &str,
    ) -> Result<i64, AppError> {
        loop {
            let answer = self.read_answer(question)?;
            match answer.parse::<i64>() {
                Ok(v) if range.contains(&v) => return Ok(v),
                Ok(_) => self.say(out_of_range)?,
                Err(_) => self.say("Integer required!")?,
            }
        }
    }

    fn read_answer(&mut self, question: &str) -> Result<String, AppError> {
        write!(self.output, "{question}")
            .and_then(|()| self.output.flush())
            .map_err(|e| AppError::prompt(format!("Failed to write prompt: {e}")))?;

        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .map_err(|e| AppError::prompt(format!("Failed to read input: {e}")))?;
        if bytes == 0 {
            return Err(AppError::prompt("No input received."));
        }
        Ok(line.trim().to_string())
    }
}

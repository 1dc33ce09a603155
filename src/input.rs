//! Interactive input collection.
//!
//! Prompts for the plan duration, the price list and the output
//! destination. Recovery is local: a bad duration or destination is asked
//! for again, a bad price list is replaced whole by the configured
//! defaults. End of input is treated like a blank line.

use std::io::{self, BufRead, Write};

use crate::config::PlannerConfig;
use crate::models::PriceVector;
use crate::render::Destination;
use crate::validation::{parse_duration, parse_prices, PriceEntry};

/// Reads validated planner inputs from a line-oriented reader.
pub struct InputProvider<'a, R, W> {
    reader: R,
    writer: W,
    config: &'a PlannerConfig,
}

impl<'a, R: BufRead, W: Write> InputProvider<'a, R, W> {
    pub fn new(reader: R, writer: W, config: &'a PlannerConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Asks for the plan duration until an accepted value or a blank line
    /// is entered.
    pub fn duration(&mut self) -> io::Result<u32> {
        let bounds = self.config.duration_bounds;
        let default = self.config.default_duration_days;
        let question = format!(
            "How many days should the buying schedule cover? (Must be between {} and {}. Default is {default}.): ",
            bounds.min_exclusive, bounds.max
        );
        loop {
            let line = self.prompt(&question)?;
            match parse_duration(&line, bounds) {
                Ok(Some(days)) => return Ok(days),
                Ok(None) => {
                    writeln!(self.writer, "Using default value of {default} days.")?;
                    return Ok(default);
                }
                Err(err) => {
                    tracing::debug!(%err, "duration rejected");
                    writeln!(
                        self.writer,
                        "{err}. Please enter a whole number between {} and {}.",
                        bounds.min_exclusive, bounds.max
                    )?;
                }
            }
        }
    }

    /// Asks once for the price list, falling back to the configured
    /// defaults on blank or invalid input.
    ///
    /// When `sort` is set the returned prices are ascending.
    pub fn prices(&mut self, sort: bool) -> io::Result<PriceVector> {
        let expected = self.config.roster.len();
        let bounds = self.config.price_bounds;
        let defaults = self.config.default_prices();
        let question = format!(
            "Enter {expected} coffee prices (numbers between {} and {}, separated by spaces). Press Enter for default: ",
            bounds.min, bounds.max
        );
        let line = self.prompt(&question)?;

        let prices = match parse_prices(&line, expected, bounds) {
            Ok(PriceEntry::Custom(prices)) => prices,
            Ok(PriceEntry::Default) => {
                writeln!(
                    self.writer,
                    "Using default coffee prices: {}.",
                    format_price_list(&defaults)
                )?;
                defaults
            }
            Err(err) => {
                tracing::warn!(%err, "price list rejected, using defaults");
                writeln!(
                    self.writer,
                    "{err}. Using default coffee prices: {}.",
                    format_price_list(&defaults)
                )?;
                defaults
            }
        };

        Ok(if sort { prices.sorted_ascending() } else { prices })
    }

    /// Asks where the schedule should go until `1`, `2` or a blank line is
    /// entered. Blank means console.
    pub fn destination(&mut self) -> io::Result<Destination> {
        loop {
            let line = self.prompt(
                "Do you want to print the coffee buying schedule to (1) Console or (2) File? Enter 1 or 2: ",
            )?;
            match line.trim() {
                "" => {
                    writeln!(self.writer, "Using default option: Console.")?;
                    return Ok(Destination::Console);
                }
                "1" => return Ok(Destination::Console),
                "2" => return Ok(Destination::File),
                other => {
                    tracing::debug!(input = other, "destination rejected");
                    writeln!(
                        self.writer,
                        "Invalid input. Please enter 1 for Console or 2 for File."
                    )?;
                }
            }
        }
    }

    fn prompt(&mut self, question: &str) -> io::Result<String> {
        write!(self.writer, "{question}")?;
        self.writer.flush()?;
        let mut line = String::new();
        // 0 bytes read: end of input, treated as blank
        self.reader.read_line(&mut line)?;
        Ok(line)
    }
}

/// Formats prices as `[3, 4, 5.5]`.
pub fn format_price_list(prices: &PriceVector) -> String {
    let items: Vec<String> = prices.as_slice().iter().map(|p| p.to_string()).collect();
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run<T>(
        input: &str,
        f: impl FnOnce(&mut InputProvider<'_, Cursor<Vec<u8>>, &mut Vec<u8>>) -> io::Result<T>,
    ) -> (T, String) {
        let config = PlannerConfig::default();
        let mut out = Vec::new();
        let value = {
            let mut provider =
                InputProvider::new(Cursor::new(input.as_bytes().to_vec()), &mut out, &config);
            f(&mut provider).unwrap()
        };
        (value, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_duration_default_on_blank() {
        let (days, out) = run("\n", |p| p.duration());
        assert_eq!(days, 68);
        assert!(out.contains("Using default value of 68 days."));
    }

    #[test]
    fn test_duration_default_on_eof() {
        let (days, _) = run("", |p| p.duration());
        assert_eq!(days, 68);
    }

    #[test]
    fn test_duration_reprompts() {
        let (days, out) = run("abc\n7\n3001\n30\n", |p| p.duration());
        assert_eq!(days, 30);
        assert_eq!(out.matches("How many days").count(), 4);
        assert!(out.contains("not a whole number"));
        assert!(out.contains("outside the accepted range"));
    }

    #[test]
    fn test_prices_custom_kept_in_order() {
        let (prices, _) = run("6 5 4 3 2 1 1\n", |p| p.prices(false));
        assert_eq!(prices.as_slice(), &[6.0, 5.0, 4.0, 3.0, 2.0, 1.0, 1.0]);
    }

    #[test]
    fn test_prices_custom_sorted() {
        let (prices, _) = run("6 5 4 3 2 1 1\n", |p| p.prices(true));
        assert_eq!(prices.as_slice(), &[1.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_prices_wrong_count_falls_back() {
        let (prices, out) = run("3 4 5 5 5 6\n", |p| p.prices(false));
        assert_eq!(prices, PriceVector::default());
        assert!(out.contains("invalid number of prices"));
        assert!(out.contains("Using default coffee prices: [3, 4, 5, 5, 5, 6, 6]."));
    }

    #[test]
    fn test_prices_out_of_bounds_falls_back() {
        let (prices, out) = run("3 4 5 5 5 6 25\n", |p| p.prices(true));
        assert_eq!(prices, PriceVector::default());
        assert!(out.contains("price out of bounds: 25"));
    }

    #[test]
    fn test_prices_blank_uses_default() {
        let (prices, out) = run("\n", |p| p.prices(false));
        assert_eq!(prices, PriceVector::default());
        assert!(out.starts_with("Enter 7 coffee prices"));
    }

    #[test]
    fn test_destination_choices() {
        assert_eq!(run("1\n", |p| p.destination()).0, Destination::Console);
        assert_eq!(run("2\n", |p| p.destination()).0, Destination::File);
        assert_eq!(run("\n", |p| p.destination()).0, Destination::Console);
    }

    #[test]
    fn test_destination_reprompts() {
        let (dest, out) = run("file\n3\n2\n", |p| p.destination());
        assert_eq!(dest, Destination::File);
        assert_eq!(out.matches("Invalid input").count(), 2);
    }

    #[test]
    fn test_format_price_list() {
        let prices = PriceVector::new(vec![3.0, 4.5]);
        assert_eq!(format_price_list(&prices), "[3, 4.5]");
    }
}

//! Countdown calculator for working days, hours and weeks between two dates.
//!
//! MIT License
//!
//! Copyright (c) 2026 66f94eae
//!
//! Permission is hereby granted, free of charge, to any person obtaining a copy
//! of this software and associated documentation files (the "Software"), to deal
//! in the Software without restriction, including without limitation the rights
//! to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
//! copies of the Software, and to permit persons to whom the Software is
//! furnished to do so, subject to the following conditions:
//!
//! The above copyright notice and this permission notice shall be included in all
//! copies or substantial portions of the Software.
//!
//! THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
//! IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
//! FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
//! AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
//! LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
//! OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
//! SOFTWARE.

use std::time::Duration;

use chrono::{Local, NaiveDate};
use clap::Parser;

mod cli;
mod conf;
mod countdown;
mod date;
mod error;
mod grid;
mod holiday;
mod identity;
mod metrics;
mod store;
mod vacation;

use cli::{Cli, Command, VacationAction};
use countdown::Countdown;
use error::Error;
use identity::Claims;
use metrics::{Metric, MetricsSnapshot};
use store::{FileStore, KeyValueStore};
use vacation::Vacation;

/// Main entry point for the countdown tool
///
/// # Usage Examples
/// ```bash
/// # Sign in once the browser helper has written its token file
/// countdown login --tokens /tmp/countdown-tokens.json
///
/// # Set the range and add a vacation
/// countdown start 2025-06-02
/// countdown end 2025-12-19
/// countdown vacation add 2025-08-04 2025-08-15
///
/// # Show the metrics and the month calendars
/// countdown show --calendar
/// ```
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();
    let conf = cli.conf();
    let today = Local::now().date_naive();

    // Open the key-value store; an unreadable file degrades to an empty
    // store with a notice instead of aborting.
    let mut store = match FileStore::open(conf.store_path()) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Notice: stored data could not be read ({e}); starting with an empty store.");
            FileStore::fresh(conf.store_path())
        }
    };

    match cli.command() {
        Command::Login { tokens, wait } => {
            let timeout = wait
                .map(Duration::from_secs)
                .unwrap_or(identity::SIGN_IN_TIMEOUT);
            let pair = identity::wait_for_tokens(tokens, timeout).await?;
            let claims = identity::decode_claims(&pair.id_token)?;
            store::save_session(&mut store, &claims)?;
            if !pair.access_token.is_empty() {
                store.set(store::ACCESS_TOKEN_KEY, pair.access_token)?;
            }
            println!("Signed in as {}.", display_name(&claims));

            let countdown = restore(&store, &claims.sub, today);
            print_snapshot(&countdown.metrics(), conf.default_metric());
        }

        Command::Logout => {
            store::clear_session(&mut store)?;
            println!("Signed out.");
        }

        Command::Status => match store::load_session(&store) {
            Some(claims) => println!(
                "Signed in as {} (subject {}).",
                display_name(&claims),
                claims.sub
            ),
            None => println!("Not signed in."),
        },

        Command::Start { date } => {
            let claims = require_session(&store)?;
            let mut countdown = restore(&store, &claims.sub, today);
            let snapshot = countdown.set_start(Some(*date));
            store::save_user_data(&mut store, &claims.sub, &countdown)?;
            print_snapshot(&snapshot, conf.default_metric());
        }

        Command::End { date } => {
            let claims = require_session(&store)?;
            let mut countdown = restore(&store, &claims.sub, today);
            let snapshot = countdown.set_end(Some(*date));
            store::save_user_data(&mut store, &claims.sub, &countdown)?;
            print_snapshot(&snapshot, conf.default_metric());
        }

        Command::Vacation { action } => {
            let claims = require_session(&store)?;
            let mut countdown = restore(&store, &claims.sub, today);
            match action {
                VacationAction::Add { start, end } => {
                    let snapshot = countdown.add_vacation(Vacation::new(Some(*start), *end));
                    store::save_user_data(&mut store, &claims.sub, &countdown)?;
                    print_vacations(&countdown);
                    print_snapshot(&snapshot, conf.default_metric());
                }
                VacationAction::Set { index, start, end } => {
                    let snapshot =
                        countdown.set_vacation(*index, Vacation::new(Some(*start), *end))?;
                    store::save_user_data(&mut store, &claims.sub, &countdown)?;
                    print_vacations(&countdown);
                    print_snapshot(&snapshot, conf.default_metric());
                }
                VacationAction::Remove { index } => {
                    let snapshot = countdown.remove_vacation(*index)?;
                    store::save_user_data(&mut store, &claims.sub, &countdown)?;
                    print_vacations(&countdown);
                    print_snapshot(&snapshot, conf.default_metric());
                }
                VacationAction::List => print_vacations(&countdown),
            }
        }

        Command::Show {
            metric,
            calendar,
            month,
            offset,
            json,
        } => {
            let countdown = match store::load_session(&store) {
                Some(claims) => restore(&store, &claims.sub, today),
                None => {
                    eprintln!("Notice: not signed in; showing an unsaved countdown starting today.");
                    Countdown::with_parts(Some(today), None, Vec::new())
                }
            };

            let snapshot = countdown.metrics();
            if *json {
                println!("{}", serde_json::to_string_pretty(&snapshot)?);
            } else {
                print_snapshot(&snapshot, (*metric).unwrap_or(conf.default_metric()));
            }
            if *calendar {
                print_calendars(&countdown, today, *month, *offset);
            }
        }
    }

    Ok(())
}

/// Loads the session or refuses the command
fn require_session(store: &dyn KeyValueStore) -> Result<Claims, Error> {
    store::load_session(store).ok_or(Error::NotSignedIn)
}

/// Restores a user's countdown, reporting any non-fatal restore notices
fn restore(store: &dyn KeyValueStore, subject: &str, today: NaiveDate) -> Countdown {
    let restored = store::restore_user_data(store, subject, today);
    for notice in &restored.notices {
        eprintln!("Notice: {notice}");
    }
    restored.countdown
}

/// Returns the best display name a set of claims offers
fn display_name(claims: &Claims) -> &str {
    claims
        .name
        .as_deref()
        .or(claims.email.as_deref())
        .unwrap_or(&claims.sub)
}

/// Prints the headline metric followed by the full snapshot
fn print_snapshot(snapshot: &MetricsSnapshot, headline: Metric) {
    println!();
    println!("{}: {}", headline.label(), headline.value(snapshot));
    println!();
    for metric in Metric::ALL {
        println!("  {:<14} {}", metric.label(), metric.value(snapshot));
    }
}

/// Prints the vacation list with its removable positions
fn print_vacations(countdown: &Countdown) {
    if countdown.vacations().is_empty() {
        println!("No vacations.");
        return;
    }
    for (index, vacation) in countdown.vacations().iter().enumerate() {
        let start = vacation
            .start
            .map(date::format_date)
            .unwrap_or_else(|| "(unset)".to_string());
        let end = vacation
            .end
            .map(date::format_date)
            .unwrap_or_else(|| "(unset)".to_string());
        println!("{index}: {start} .. {end}");
    }
}

/// Renders the start month calendar, and the end month when the range
/// spans months; `--month` jumps to an arbitrary month and `offset` steps
/// forward or back from the default
fn print_calendars(
    countdown: &Countdown,
    today: NaiveDate,
    month: Option<NaiveDate>,
    offset: i32,
) {
    let start = countdown.start();
    let end = countdown.end();

    let mut anchor = month.or(start).unwrap_or(today);
    for _ in 0..offset.unsigned_abs() {
        anchor = if offset < 0 {
            grid::prev_month(anchor)
        } else {
            grid::next_month(anchor)
        };
    }
    println!("{}", grid::render(&grid::month_grid(anchor, today, start, end)));

    if month.is_none() && offset == 0 && grid::spans_months(start, end) {
        if let Some(end_anchor) = end {
            println!(
                "{}",
                grid::render(&grid::month_grid(end_anchor, today, start, end))
            );
        }
    }
}

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clinic_core::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "clinic")]
#[command(about = "Face & Figure appointment booking", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// List treatments, optionally for a single category tab
    Catalog {
        /// Category id (consult, contour, tox, bio, facials, laser) or "all"
        #[arg(long, default_value = ALL_TAB)]
        tab: String,
    },

    /// List bookable weekdays
    Dates {
        /// Number of dates to list (defaults to the configured horizon)
        #[arg(long)]
        count: Option<usize>,

        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
    },

    /// Request an appointment
    Book {
        /// Treatment name as shown in the catalog
        #[arg(long)]
        treatment: Option<String>,

        /// Position in the `dates` listing, starting at 1
        #[arg(long, conflicts_with = "date")]
        date_index: Option<usize>,

        /// Appointment date (YYYY-MM-DD); must be a bookable weekday
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Appointment time (HH:00, 10:00 to 16:00)
        #[arg(long)]
        time: Option<String>,

        /// Client full name
        #[arg(long)]
        name: Option<String>,

        /// Client phone number
        #[arg(long)]
        phone: Option<String>,

        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Never ask on stdin for missing values
        #[arg(long)]
        no_prompt: bool,

        /// Print the confirmation as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Values for the `book` command, gathered from flags
struct BookArgs {
    treatment: Option<String>,
    date_index: Option<usize>,
    date: Option<NaiveDate>,
    time: Option<String>,
    name: Option<String>,
    phone: Option<String>,
    no_prompt: bool,
    json: bool,
}

fn main() -> Result<()> {
    clinic_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Catalog { tab } => cmd_catalog(&config, &tab),
        Commands::Dates { count, from } => {
            let clock = clock_for(from);
            cmd_dates(&config, clock.as_ref(), count)
        }
        Commands::Book {
            treatment,
            date_index,
            date,
            time,
            name,
            phone,
            from,
            no_prompt,
            json,
        } => {
            let args = BookArgs {
                treatment,
                date_index,
                date,
                time,
                name,
                phone,
                no_prompt,
                json,
            };
            let clock = clock_for(from);
            let stdin = io::stdin();
            cmd_book(&config, clock.as_ref(), args, &mut stdin.lock())
        }
    }
}

fn clock_for(from: Option<NaiveDate>) -> Box<dyn Clock> {
    match from {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock),
    }
}

fn cmd_catalog(config: &Config, tab: &str) -> Result<()> {
    let catalog = config.catalog();
    let visible = filter_catalog(&catalog.categories, tab);

    if visible.is_empty() {
        println!("No category with id '{}'.", tab);
        return Ok(());
    }

    for category in visible {
        println!("\n{} [{}]", category.name, category.id);
        for item in &category.items {
            println!("  {:<28} {:>6}  {}", item.name, item.price, item.description);
        }
    }
    println!();

    Ok(())
}

fn cmd_dates(config: &Config, clock: &dyn Clock, count: Option<usize>) -> Result<()> {
    let count = count.unwrap_or(config.booking.horizon_days);
    for (i, d) in bookable_dates_from(clock, count).iter().enumerate() {
        println!(
            "{:>3}. {} {:>2}  ({}, {})",
            i + 1,
            d.weekday_label,
            d.day_of_month,
            d.full_label,
            d.date
        );
    }
    Ok(())
}

fn cmd_book(
    config: &Config,
    clock: &dyn Clock,
    args: BookArgs,
    input: &mut dyn BufRead,
) -> Result<()> {
    let catalog = config.catalog();
    let dates = bookable_dates_from(clock, config.booking.horizon_days);
    tracing::debug!("Offering {} dates from {}", dates.len(), clock.today());
    let mut session = ReservationSession::new(Some(config.default_treatment(catalog)));
    let interactive = !args.no_prompt;

    // 01. Treatment
    if let Some(name) = args.treatment {
        let treatment = catalog
            .find_treatment(&name)
            .ok_or_else(|| Error::UnknownTreatment(name.clone()))?;
        session.select_treatment(treatment.clone());
    }

    // 02. Date
    let chosen = match (args.date_index, args.date) {
        (Some(index), _) => Some(date_by_index(&dates, index)?),
        (None, Some(date)) => Some(date_by_value(&dates, date)?),
        (None, None) if interactive => prompt_date(&dates, input)?,
        (None, None) => None,
    };
    if let Some(date) = chosen {
        session.select_date(date);
    }

    // 03. Time
    let time = match args.time {
        Some(t) => Some(t.parse::<TimeSlot>()?),
        None if interactive && !session.available_time_slots().is_empty() => {
            prompt_time(session.available_time_slots(), input)?
        }
        None => None,
    };
    if let Some(slot) = time {
        if !session.select_time(slot) {
            eprintln!("Pick a date before choosing a time.");
        }
    }

    // 04. Details
    let name = match args.name {
        Some(n) => Some(n),
        None if interactive => prompt_line("Full name", input)?,
        None => None,
    };
    if let Some(n) = name {
        session.set_client_name(n);
    }

    let phone = match args.phone {
        Some(p) => Some(p),
        None if interactive => prompt_line("Phone number (+961...)", input)?,
        None => None,
    };
    if let Some(p) = phone {
        session.set_client_phone(p);
    }

    if !session.confirm() {
        let missing: Vec<String> = session
            .draft()
            .missing_fields()
            .iter()
            .map(|f| f.to_string())
            .collect();
        return Err(Error::Other(format!(
            "Booking incomplete, missing: {}",
            missing.join(", ")
        )));
    }

    let summary = session
        .summary()
        .ok_or_else(|| Error::Other("Confirmed booking has no summary".into()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        println!("\n✓ Request received");
        println!("  {}", summary.text());
        println!("  Price: {}", summary.treatment_price());
        println!("  Reference: {}", summary.reference());
    }

    Ok(())
}

fn date_by_index(dates: &[BookableDate], index: usize) -> Result<BookableDate> {
    index
        .checked_sub(1)
        .and_then(|i| dates.get(i))
        .cloned()
        .ok_or_else(|| {
            Error::InvalidDate(format!(
                "date index {} is outside 1..={}",
                index,
                dates.len()
            ))
        })
}

fn date_by_value(dates: &[BookableDate], date: NaiveDate) -> Result<BookableDate> {
    dates
        .iter()
        .find(|d| d.date == date)
        .cloned()
        .ok_or_else(|| Error::InvalidDate(format!("{} is not a bookable date", date)))
}

/// Print a prompt and read one trimmed line; `None` on empty input or EOF
fn prompt_line(label: &str, input: &mut dyn BufRead) -> Result<Option<String>> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let line = line.trim();

    Ok((!line.is_empty()).then(|| line.to_string()))
}

fn prompt_date(dates: &[BookableDate], input: &mut dyn BufRead) -> Result<Option<BookableDate>> {
    println!("\nSelect a date:");
    for (i, d) in dates.iter().enumerate() {
        println!("  {:>3}. {} {}", i + 1, d.weekday_label, d.full_label);
    }

    loop {
        let Some(answer) = prompt_line("Date number", input)? else {
            return Ok(None);
        };
        match answer.parse::<usize>().map_err(|e| Error::InvalidDate(e.to_string())) {
            Ok(index) => match date_by_index(dates, index) {
                Ok(date) => return Ok(Some(date)),
                Err(e) => eprintln!("{}", e),
            },
            Err(e) => eprintln!("{}", e),
        }
    }
}

fn prompt_time(slots: &[TimeSlot], input: &mut dyn BufRead) -> Result<Option<TimeSlot>> {
    let labels: Vec<String> = slots.iter().map(|s| s.to_string()).collect();
    println!("\nAvailable times: {}", labels.join("  "));

    loop {
        let Some(answer) = prompt_line("Time", input)? else {
            return Ok(None);
        };
        match answer.parse::<TimeSlot>() {
            Ok(slot) => return Ok(Some(slot)),
            Err(e) => eprintln!("{}", e),
        }
    }
}

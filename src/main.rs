use clap::Parser;
use monke::{
    args::Args,
    report::{Banner, Printer, Report},
    Evolution,
};
use std::error::Error;

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let evolution = Evolution::seeded(args.settings())?;

    let outcome = if args.json {
        evolution.run(&mut ())
    } else {
        println!("{}", Banner(evolution.settings()));
        if evolution.settings().printing {
            evolution.run(&mut Printer)
        } else {
            evolution.run(&mut ())
        }
    };

    let report = Report::new(&args.target, &outcome);
    if args.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

use portassist::plans::{plans_for, recommend, PlanWeights};
use portassist::porting::rules::PORTING_STEPS;
use portassist::reference::operators::OperatorId;
use portassist::resolver;

const USAGE: &str = "usage: portassist <command>

commands:
  resolve <number>            operator/circle lookup for a 10-digit number
  plans <operator>            list an operator's prepaid plans
  recommend <operator> [n]    best plans by the default weights (default 3)
  steps                       subscriber porting instructions";

fn main() {
    // Default to info level for our crate
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("portassist=info"),
    )
    .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    std::process::exit(run(&args));
}

fn run(args: &[String]) -> i32 {
    match args.first().map(String::as_str) {
        Some("resolve") => {
            let Some(number) = args.get(1) else {
                eprintln!("{}", USAGE);
                return 2;
            };
            match resolver::lookup_full(number) {
                Ok(lookup) => print_json(&lookup),
                Err(e) => {
                    log::error!("{}", e);
                    2
                }
            }
        }
        Some("plans") => {
            let Some(operator) = args.get(1).and_then(|s| OperatorId::parse(s)) else {
                eprintln!("{}", USAGE);
                return 2;
            };
            print_json(&plans_for(operator))
        }
        Some("recommend") => {
            let Some(operator) = args.get(1).and_then(|s| OperatorId::parse(s)) else {
                eprintln!("{}", USAGE);
                return 2;
            };
            let top_n = args
                .get(2)
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(3);
            match recommend(operator, &PlanWeights::default(), top_n) {
                Ok(scored) => print_json(&scored),
                Err(e) => {
                    log::error!("{}", e);
                    2
                }
            }
        }
        Some("steps") => print_json(&PORTING_STEPS),
        _ => {
            eprintln!("{}", USAGE);
            2
        }
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            println!("{}", json);
            0
        }
        Err(e) => {
            log::error!("failed to serialize output: {}", e);
            1
        }
    }
}

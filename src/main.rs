pub mod attributes;
pub mod classifier;
pub mod error;
pub mod prompt;
pub mod resolver;

use std::process::ExitCode;

use rustop::opts;

use classifier::{ClassificationReport, classify, report};
use resolver::platform_resolver;

fn main() -> ExitCode {
    let (args, _rest) = opts! {
        synopsis "Show how the Windows shell namespace classifies a path";
        opt json:bool=false, desc:"Print the result as JSON.";
        param path:Option<String>, desc:"Path to classify. Prompts when omitted.";
    }.parse_or_exit();

    let path = match args.path {
        Some(path) => path,
        None => match prompt::read_path() {
            Ok(path) => path,
            Err(err) => {
                println!("{}", err);
                return ExitCode::FAILURE;
            },
        },
    };

    let resolver = platform_resolver();
    let outcome = classify(resolver.as_ref(), &path);

    if args.json {
        match serde_json::to_string_pretty(&ClassificationReport::new(&path, &outcome)) {
            Ok(serialized) => println!("{}", serialized),
            Err(err) => {
                println!("Unable to serialize the result: {}", err);
                return ExitCode::FAILURE;
            },
        }
    } else {
        for line in report(&path, &outcome) {
            println!("{}", line);
        }
    }

    // a resolver failure is a reported result, not a program error
    ExitCode::SUCCESS
}

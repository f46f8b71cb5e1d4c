mod cli;

use std::error::Error;
use std::process;

use clap::Parser;
use schema_resolver::{resolve_schema, Config, ProxySettings};

fn main() {
    env_logger::init();
    let cli = cli::Cli::parse();

    let config = Config {
        proxy: cli.proxy.map(|url| ProxySettings {
            url,
            login: cli.proxy_login,
            password: cli.proxy_password,
        }),
        allow_dtd: cli.allow_dtd,
    };

    let schema = match resolve_schema(&config, &cli.location) {
        Ok(schema) => schema,
        Err(error) => {
            eprintln!("error: {error}");
            let mut source = error.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            process::exit(1);
        }
    };

    for document in schema.documents() {
        println!(
            "{} ({} references)",
            document.location(),
            document.references().len()
        );
    }

    let mut missing = false;
    for name in &cli.find_type {
        let declaration = schema
            .documents()
            .find_map(|document| document.declared_type(name).map(|node| (document, node)));
        match declaration {
            Some((document, node)) => {
                println!("{name}: {} declared in {}", node.name(), document.location());
            }
            None => {
                println!("{name}: not found");
                missing = true;
            }
        }
    }
    if missing {
        process::exit(2);
    }
}

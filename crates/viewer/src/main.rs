//! Thin command-line surface over the viewer core. Prints JSON on stdout
//! for the presentation layer; diagnostics go to stderr via tracing.
//!
//! Configuration comes from the TOML file / environment (see `config.rs`),
//! not from flags — flags only carry the per-request parameters.

use viewer::filter::EntryFilter;
use viewer::parser::LEVELS;
use viewer::runtime::boot;

const USAGE: &str = "\
Usage: logview [COMMAND]

Commands:
  files                          List log files, newest first
  page [FILE] [--level LEVEL] [--query TEXT] [--page N]
                                 One page of entries (newest file if FILE omitted)
  search QUERY [--level LEVEL]   Search every log file for QUERY
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    boot::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("page");
    let rest = args.get(1..).unwrap_or(&[]);

    let view = boot::boot()?;

    match command {
        "files" => {
            println!("{}", serde_json::to_string_pretty(&view.files())?);
        }
        "page" => {
            let request = Request::parse(rest)?;
            let file = match request.file.or_else(|| view.files().into_iter().next()) {
                Some(file) => file,
                None => return Err("no log files found".into()),
            };
            let filter = EntryFilter::new(request.level.as_deref(), request.query.as_deref())?;
            let page = view.page(&file, &filter, request.page)?;
            // Same shape the index view consumes: file list and level
            // table alongside the requested page.
            let body = serde_json::json!({
                "files": view.files(),
                "file": file,
                "levels": LEVELS,
                "current_page": request.page,
                "entries": page.entries,
                "has_more": page.has_more,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        "search" => {
            let request = Request::parse(rest)?;
            let query = request
                .file
                .ok_or("search requires a query argument")?;
            let filter = EntryFilter::new(request.level.as_deref(), Some(&query))?;
            let results = view.search(&filter);
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        _ => {
            eprint!("{USAGE}");
            std::process::exit(2);
        }
    }

    Ok(())
}

/// Per-request parameters. The leading positional doubles as the filename
/// for `page` and the query for `search`.
struct Request {
    file: Option<String>,
    level: Option<String>,
    query: Option<String>,
    page: usize,
}

impl Request {
    fn parse(args: &[String]) -> Result<Self, Box<dyn std::error::Error>> {
        let mut request = Request {
            file: None,
            level: None,
            query: None,
            page: 1,
        };

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--level" => {
                    request.level = Some(take_value(&mut iter, "--level")?);
                }
                "--query" => {
                    request.query = Some(take_value(&mut iter, "--query")?);
                }
                "--page" => {
                    let value = take_value(&mut iter, "--page")?;
                    request.page = value
                        .parse()
                        .map_err(|_| format!("--page expects a number, got '{value}'"))?;
                }
                positional if !positional.starts_with("--") && request.file.is_none() => {
                    request.file = Some(positional.to_string());
                }
                unknown => return Err(format!("unknown argument: {unknown}").into()),
            }
        }

        Ok(request)
    }
}

fn take_value<'a>(
    iter: &mut std::slice::Iter<'a, String>,
    flag: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    iter.next()
        .cloned()
        .ok_or_else(|| format!("{flag} expects a value").into())
}

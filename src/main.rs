use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use roster::api::RosterApi;
use roster::error::{Result, RosterError};
use roster::model::{StudentFields, StudentId};
use roster::stats::recent;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

mod args;
mod print;
mod validate;

use args::{Cli, Commands, ExportFormat, FieldArgs};
use print::{print_messages, print_page, print_stats};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // All state is volatile: every invocation starts from the fixed seeds.
    let mut api = RosterApi::seeded();

    match cli.command {
        Some(Commands::List {
            term,
            page,
            per_page,
        }) => handle_list(&mut api, term, page, per_page, cli.json),
        Some(Commands::Add { fields }) => handle_add(&mut api, fields),
        Some(Commands::Update { id, fields }) => handle_update(&mut api, id, fields),
        Some(Commands::Delete { ids, yes }) => handle_delete(&mut api, &ids, yes),
        Some(Commands::Stats) => handle_stats(&api, cli.json),
        Some(Commands::Export { format }) => handle_export(&mut api, format),
        None => handle_list(&mut api, None, 1, roster::api::DEFAULT_PAGE_SIZE, cli.json),
    }
}

fn handle_list(
    api: &mut RosterApi,
    term: Option<String>,
    page: usize,
    per_page: usize,
    json: bool,
) -> Result<()> {
    api.set_search(term.unwrap_or_default());
    api.set_page_size(per_page);
    api.set_page(page);

    let view = api.current_page();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_page(&view);
    }
    Ok(())
}

fn handle_add(api: &mut RosterApi, fields: FieldArgs) -> Result<()> {
    let fields = validated(fields)?;
    let outcome = api.add_student(fields);
    print_messages(&outcome.messages);
    Ok(())
}

fn handle_update(api: &mut RosterApi, id: StudentId, fields: FieldArgs) -> Result<()> {
    let fields = validated(fields)?;
    let outcome = api.update_student(id, fields)?;
    print_messages(&outcome.messages);
    Ok(())
}

fn handle_delete(api: &mut RosterApi, ids: &[StudentId], skip_confirm: bool) -> Result<()> {
    let targets: Vec<_> = ids.iter().filter_map(|id| api.store().get(*id)).collect();
    if targets.is_empty() {
        println!("No matching students.");
        return Ok(());
    }

    if !skip_confirm {
        println!(
            "Are you sure you want to delete {} student(s)?",
            targets.len()
        );
        for student in &targets {
            println!("  {} {}", student.id, student.fields.name);
        }
        print!("[Y] To delete: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        if input.trim() != "Y" {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let outcome = if ids.len() == 1 {
        api.delete_student(ids[0])
    } else {
        api.delete_many(ids)
    };
    print_messages(&outcome.messages);
    Ok(())
}

fn handle_stats(api: &RosterApi, json: bool) -> Result<()> {
    let stats = api.stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats(&stats, recent(api.store().students(), 5));
    }
    Ok(())
}

fn handle_export(api: &mut RosterApi, format: ExportFormat) -> Result<()> {
    let (opts, title) = match &format {
        ExportFormat::Csv { opts } => (opts.clone(), None),
        ExportFormat::Report { opts, title } => (opts.clone(), Some(title.clone())),
    };

    if let Some(term) = &opts.search {
        api.set_search(term.clone());
    }
    let selected_only = !opts.ids.is_empty();
    for id in &opts.ids {
        api.toggle_selected(*id);
    }

    let path = opts.out.clone().unwrap_or_else(|| default_out(&format));
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);

    let count = match &title {
        None => api.export_csv(&mut writer, selected_only)?,
        Some(title) => api.export_report(&mut writer, title, selected_only)?,
    };
    writer.flush()?;

    println!(
        "{}",
        format!("Exported {} record(s) to {}", count, path.display()).green()
    );
    Ok(())
}

fn default_out(format: &ExportFormat) -> PathBuf {
    let date = Utc::now().format("%Y-%m-%d");
    match format {
        ExportFormat::Csv { .. } => PathBuf::from(format!("students_data_{}.csv", date)),
        ExportFormat::Report { .. } => PathBuf::from(format!("students_report_{}.txt", date)),
    }
}

fn validated(args: FieldArgs) -> Result<StudentFields> {
    let fields = StudentFields {
        name: args.name,
        email: args.email,
        phone: args.phone,
        password: args.password,
        confirm_password: args.confirm_password,
        language: args.language,
        gender: args.gender,
        dob: args.dob,
    };

    let errors = validate::validate(&fields);
    if errors.is_empty() {
        return Ok(fields);
    }

    for error in &errors {
        eprintln!("{} {}", format!("{}:", error.field).red(), error.message);
    }
    Err(RosterError::Invalid(format!(
        "{} field(s) failed validation",
        errors.len()
    )))
}

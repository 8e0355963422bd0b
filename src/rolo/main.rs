use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use rolo::api::{CmdMessage, MessageLevel, RoloApi};
use rolo::book::BirthdayReminder;
use rolo::config::RoloConfig;
use rolo::error::{Result, RoloError};
use rolo::model::Record;
use rolo::store::fs::FileStore;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: RoloApi<FileStore>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    let count = ctx.api.book().len();
    let on_file = if count == 1 {
        "1 contact".to_string()
    } else {
        format!("{} contacts", count)
    };
    println!("Welcome to rolo. {} on file. Type 'help' for commands.", on_file);

    loop {
        print!("rolo> ");
        io::stdout().flush().map_err(RoloError::Io)?;

        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line).map_err(RoloError::Io)?;
        if bytes == 0 {
            // stdin closed; behave like `close`
            println!();
            ctx.api.save()?;
            println!("Contacts saved. Bye!");
            break;
        }

        let Some((command, cmd_args)) = parse_line(&line) else {
            continue;
        };

        match command.as_str() {
            "close" | "exit" => {
                ctx.api.save()?;
                println!("Contacts saved. Bye!");
                break;
            }
            _ => {
                if let Err(e) = dispatch(&mut ctx, &command, &cmd_args) {
                    println!("{}", e.to_string().red());
                }
            }
        }
    }

    Ok(())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => {
            let proj_dirs =
                ProjectDirs::from("com", "rolo", "rolo").expect("Could not determine data dir");
            proj_dirs.data_dir().to_path_buf()
        }
    };

    let config = RoloConfig::load(&data_dir).unwrap_or_default();
    let api = RoloApi::load(FileStore::new(data_dir), config)?;

    Ok(AppContext { api })
}

/// First word is the command, case-insensitive. The rest are arguments,
/// kept verbatim since names and dates are matched exactly.
fn parse_line(line: &str) -> Option<(String, Vec<String>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some((command, args))
}

fn dispatch(ctx: &mut AppContext, command: &str, args: &[String]) -> Result<()> {
    match command {
        "hello" => {
            println!("Hello! How can I help?");
            Ok(())
        }
        "help" => {
            print_help();
            Ok(())
        }
        "add" => handle_add(ctx, args),
        "change" => handle_change(ctx, args),
        "phone" => handle_phone(ctx, args),
        "all" => handle_all(ctx),
        "delete" => handle_delete(ctx, args),
        "add-birthday" => handle_add_birthday(ctx, args),
        "show-birthday" => handle_show_birthday(ctx, args),
        "birthdays" => handle_birthdays(ctx),
        _ => {
            println!(
                "{}",
                "Invalid command. Type 'help' to see what I understand.".yellow()
            );
            Ok(())
        }
    }
}

fn handle_add(ctx: &mut AppContext, args: &[String]) -> Result<()> {
    let [name, number] = args else {
        return usage("add <name> <phone>");
    };
    let result = ctx.api.add_contact(name, number)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_change(ctx: &mut AppContext, args: &[String]) -> Result<()> {
    let [name, old, new] = args else {
        return usage("change <name> <old phone> <new phone>");
    };
    let result = ctx.api.change_phone(name, old, new)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_phone(ctx: &mut AppContext, args: &[String]) -> Result<()> {
    let [name] = args else {
        return usage("phone <name>");
    };
    let result = ctx.api.phones(name)?;
    if let Some(record) = result.listed.first() {
        if record.phones().is_empty() {
            println!("{} has no phone numbers on file.", record.name());
        } else {
            println!("{}: {}", record.name(), join_phones(record));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_all(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list_contacts()?;
    print_contacts(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, args: &[String]) -> Result<()> {
    let result = match args {
        [name] => ctx.api.delete_contact(name, None)?,
        [name, number] => ctx.api.delete_contact(name, Some(number.as_str()))?,
        _ => return usage("delete <name> [phone]"),
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_add_birthday(ctx: &mut AppContext, args: &[String]) -> Result<()> {
    let [name, date] = args else {
        return usage("add-birthday <name> <DD.MM.YYYY>");
    };
    let result = ctx.api.add_birthday(name, date)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show_birthday(ctx: &mut AppContext, args: &[String]) -> Result<()> {
    let [name] = args else {
        return usage("show-birthday <name>");
    };
    let result = ctx.api.show_birthday(name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_birthdays(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.upcoming_birthdays()?;
    print_reminders(&result.reminders);
    print_messages(&result.messages);
    Ok(())
}

fn usage(text: &str) -> Result<()> {
    println!("{}", format!("Usage: {}", text).yellow());
    Ok(())
}

fn print_help() {
    println!("Commands:");
    println!("  add <name> <phone>           Add a contact, or another phone to an existing one");
    println!("  change <name> <old> <new>    Replace one of a contact's phones");
    println!("  phone <name>                 Show a contact's phones");
    println!("  all                          List every contact");
    println!("  delete <name> [phone]        Remove a contact, or just one of its phones");
    println!("  add-birthday <name> <date>   Record a birthday (DD.MM.YYYY)");
    println!("  show-birthday <name>         Show a contact's birthday");
    println!("  birthdays                    Birthdays coming up within the reminder window");
    println!("  hello                        Say hi");
    println!("  close | exit                 Save and leave");
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn join_phones(record: &Record) -> String {
    record
        .phones()
        .iter()
        .map(|p| p.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

fn phones_column(record: &Record) -> String {
    if record.phones().is_empty() {
        "-".to_string()
    } else {
        join_phones(record)
    }
}

fn print_contacts(records: &[Record]) {
    if records.is_empty() {
        println!("No contacts saved.");
        return;
    }

    let name_width = records
        .iter()
        .map(|r| r.name().as_str().width())
        .max()
        .unwrap_or(0);
    let phones_width = records
        .iter()
        .map(|r| phones_column(r).width())
        .max()
        .unwrap_or(0);

    for record in records {
        let name = record.name().as_str();
        let phones = phones_column(record);
        let name_pad = " ".repeat(name_width.saturating_sub(name.width()) + 2);
        let phones_pad = " ".repeat(phones_width.saturating_sub(phones.width()) + 2);

        match record.birthday() {
            Some(birthday) => println!(
                "  {}{}{}{}{}",
                name.bold(),
                name_pad,
                phones,
                phones_pad,
                birthday.to_string().dimmed()
            ),
            None => println!("  {}{}{}", name.bold(), name_pad, phones),
        }
    }
}

fn print_reminders(reminders: &[BirthdayReminder]) {
    for reminder in reminders {
        println!(
            "  {}  {}",
            reminder.date.format("%d.%m.%Y").to_string().yellow(),
            reminder.name.as_str().bold()
        );
    }
}

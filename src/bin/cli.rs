// LibriLend - Lending Library Catalog
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! LibriLend presentation shell
//!
//! Gathers raw user input, hands it to the catalog service, renders what
//! comes back. Every subcommand maps one-to-one onto a service operation;
//! `menu` runs the interactive numbered loop. No domain rule lives here.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use librilend::config::{default_catalog_path, AppConfig};
use librilend::{BookRecord, BookService, CatalogError, CatalogService, JsonFileStore};

#[derive(Parser)]
#[command(name = "librilend-cli")]
#[command(about = "LibriLend CLI - lending library catalog", long_about = None)]
struct Cli {
    /// Configuration file naming the catalog location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog file path (overrides the configuration file)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Catalog a brand-new book
    Create {
        title: String,
        author: String,
        publication_year: String,
    },
    /// Buy another copy of an already-cataloged book
    Buy {
        book_id: String,
        /// Defaults to the current year when omitted
        #[arg(default_value = "")]
        publication_year: String,
    },
    /// List the full catalog
    List,
    /// Lend a copy to a patron
    Take { book_id: String },
    /// Receive a copy back from a patron
    Return { book_id: String },
    /// Search the catalog by exact title
    SearchTitle { title: String },
    /// Search the catalog by exact author
    SearchAuthor { author: String },
    /// Run the interactive menu loop
    Menu,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let catalog_path = resolve_catalog_path(&cli)?;
    let service = BookService::new(JsonFileStore::new(&catalog_path));

    match cli.command {
        Commands::Create {
            title,
            author,
            publication_year,
        } => render(service.create_book(&title, &author, &publication_year)),
        Commands::Buy {
            book_id,
            publication_year,
        } => render(service.buy_book_copy(&book_id, &publication_year)),
        Commands::List => render_list(service.get_all_books(), "The library is empty."),
        Commands::Take { book_id } => render(service.take_book(&book_id)),
        Commands::Return { book_id } => render(service.return_book(&book_id)),
        Commands::SearchTitle { title } => {
            render_list(service.search_books_by_title(&title), "No books were found.")
        }
        Commands::SearchAuthor { author } => {
            render_list(service.search_books_by_author(&author), "No books were found.")
        }
        Commands::Menu => run_menu(&service),
    }
}

/// Flag beats configuration file beats platform default
fn resolve_catalog_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.catalog {
        return Ok(path.clone());
    }
    if let Some(config_path) = &cli.config {
        let config = AppConfig::load(config_path)
            .with_context(|| format!("Failed to load configuration {}", config_path.display()))?;
        return Ok(config.connection.book_file_path);
    }
    Ok(default_catalog_path())
}

fn render(result: librilend::Result<BookRecord>) -> Result<()> {
    match result {
        Ok(book) => {
            print_book(&book);
            Ok(())
        }
        Err(e) => {
            print_error(&e);
            std::process::exit(1);
        }
    }
}

fn render_list(result: librilend::Result<Vec<BookRecord>>, empty_message: &str) -> Result<()> {
    match result {
        Ok(books) if books.is_empty() => {
            println!("{}", empty_message);
            Ok(())
        }
        Ok(books) => {
            for book in &books {
                print_book(book);
            }
            Ok(())
        }
        Err(e) => {
            print_error(&e);
            std::process::exit(1);
        }
    }
}

fn print_book(book: &BookRecord) {
    println!("Book id: {}", book.id);
    println!("Book title: {}", book.title);
    println!("Book author: {}", book.author);
    println!("Book publication year: {}", book.publication_year);
    println!("Is book taken: {}", book.is_taken);
    println!();
}

/// Name the error kind so validation, conflicts, and store failures stay
/// visibly distinct to the operator
fn print_error(error: &CatalogError) {
    if error.is_validation() {
        eprintln!("Invalid input: {}", error.user_message());
    } else if error.is_conflict() {
        eprintln!("Cannot do that: {}", error.user_message());
    } else if error.is_store() {
        eprintln!("Storage failure: {}", error.user_message());
    } else {
        eprintln!("Error: {}", error.user_message());
    }
}

// ===== Interactive menu =====

/// Menu actions, dispatched by a plain match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    CreateBook,
    BuyCopy,
    TakeBook,
    ReturnBook,
    Search,
    List,
    Quit,
}

impl MenuAction {
    fn from_input(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuAction::CreateBook),
            "2" => Some(MenuAction::BuyCopy),
            "3" => Some(MenuAction::TakeBook),
            "4" => Some(MenuAction::ReturnBook),
            "5" => Some(MenuAction::Search),
            "6" => Some(MenuAction::List),
            "q" | "Q" => Some(MenuAction::Quit),
            _ => None,
        }
    }
}

fn run_menu<S: CatalogService>(service: &S) -> Result<()> {
    loop {
        println!("Choose an action:");
        println!("1 -> create a book");
        println!("2 -> buy a book copy and add it to the library");
        println!("3 -> take a book from the library");
        println!("4 -> return a book to the library");
        println!("5 -> search for a book by title or author");
        println!("6 -> list the whole catalog");
        println!("q -> quit");

        let choice = prompt("Write your action: ")?;
        let Some(action) = MenuAction::from_input(choice.trim()) else {
            println!("Invalid action. Please choose a valid option.");
            println!();
            continue;
        };

        let outcome = match action {
            MenuAction::CreateBook => menu_create(service),
            MenuAction::BuyCopy => menu_buy_copy(service),
            MenuAction::TakeBook => menu_take(service),
            MenuAction::ReturnBook => menu_return(service),
            MenuAction::Search => menu_search(service),
            MenuAction::List => menu_list(service),
            MenuAction::Quit => return Ok(()),
        };

        match outcome {
            Ok(()) => {}
            Err(e) => print_error(&e),
        }
        println!();
    }
}

fn menu_create<S: CatalogService>(service: &S) -> librilend::Result<()> {
    println!("Book creation:");
    let title = prompt_domain("Enter title: ")?;
    let author = prompt_domain("Enter author: ")?;
    let year = prompt_domain("Enter publication year: ")?;

    let created = service.create_book(&title, &author, &year)?;
    println!("Created book:");
    print_book(&created);
    Ok(())
}

fn menu_buy_copy<S: CatalogService>(service: &S) -> librilend::Result<()> {
    println!("Which book copy do you want to buy?");
    menu_list(service)?;

    let book_id = prompt_domain("Enter the id of the book you want to buy a copy of: ")?;
    let year = prompt_domain(
        "Enter the publication year (leave empty for the current year): ",
    )?;

    let copy = service.buy_book_copy(book_id.trim(), &year)?;
    println!("New book copy:");
    print_book(&copy);
    Ok(())
}

fn menu_take<S: CatalogService>(service: &S) -> librilend::Result<()> {
    println!("Taking a book from the library");
    menu_list(service)?;

    let book_id = prompt_domain("Enter the id of the book you want to take: ")?;
    let taken = service.take_book(book_id.trim())?;
    println!("Taken book:");
    print_book(&taken);
    Ok(())
}

fn menu_return<S: CatalogService>(service: &S) -> librilend::Result<()> {
    println!("Returning a book to the library");
    menu_list(service)?;

    let book_id = prompt_domain("Enter the id of the book you want to return: ")?;
    let returned = service.return_book(book_id.trim())?;
    println!("Returned book:");
    print_book(&returned);
    Ok(())
}

fn menu_search<S: CatalogService>(service: &S) -> librilend::Result<()> {
    let mode = prompt_domain("Search by (t)itle or (a)uthor: ")?;
    let books = match mode.trim() {
        "t" | "T" => {
            let title = prompt_domain("Enter title: ")?;
            service.search_books_by_title(&title)?
        }
        "a" | "A" => {
            let author = prompt_domain("Enter author: ")?;
            service.search_books_by_author(&author)?
        }
        _ => {
            println!("Invalid choice. Please choose 't' or 'a'.");
            return Ok(());
        }
    };

    if books.is_empty() {
        println!("No books were found.");
    } else {
        for book in &books {
            print_book(book);
        }
    }
    Ok(())
}

fn menu_list<S: CatalogService>(service: &S) -> librilend::Result<()> {
    let books = service.get_all_books()?;
    if books.is_empty() {
        println!("The library is empty.");
    } else {
        for book in &books {
            print_book(book);
        }
    }
    Ok(())
}

/// Read one line of input, newline stripped
fn prompt(message: &str) -> io::Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(&['\n', '\r'][..]).to_string())
}

/// prompt, with I/O failures folded into the catalog error space so menu
/// handlers stay on one Result type
fn prompt_domain(message: &str) -> librilend::Result<String> {
    prompt(message).map_err(|e| CatalogError::store(format!("Failed to read input: {}", e)))
}

//! Walks through every pattern in the workspace and prints what happens.
//!
//! Log verbosity follows `RUST_LOG` (e.g. `RUST_LOG=trace`).

use tracing_subscriber::{fmt, EnvFilter};

use design_patterns::core::Result;
use design_patterns::creational::get_instance;
use design_patterns::solid::interface_segregation::{
    Machine, MultiFunctionMachine, MyPrinter, MyScanner, OldFashionedPrinter,
};
use design_patterns::solid::open_closed::{
    BetterFilter, Color, ColorSpecification, Size, SizeSpecification,
};
use design_patterns::solid::{
    Document, Filter, Journal, PersistenceManager, Printer, Product, Scanner,
};

fn singleton() {
    println!("Singleton:");
    for _ in 0..3 {
        println!("- add_one -> {}", get_instance().add_one());
    }
}

fn open_closed() {
    let products = vec![
        Product::new("Apple", Color::Green, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("House", Color::Blue, Size::Large),
    ];
    let filter = BetterFilter;

    println!("Green products:");
    for p in filter.filter(&products, &ColorSpecification::new(Color::Green)) {
        println!("- {} is green", p.name);
    }

    println!("Large products:");
    for p in filter.filter(&products, &SizeSpecification::new(Size::Large)) {
        println!("- {} is large", p.name);
    }

    println!("Large blue items:");
    let large_blue = SizeSpecification::new(Size::Large) & ColorSpecification::new(Color::Blue);
    for p in filter.filter(&products, &large_blue) {
        println!("- {} is large and blue", p.name);
    }
}

fn interface_segregation() {
    let page = Document::new("quarterly report");

    println!("Machines:");
    let mut old = OldFashionedPrinter::new();
    if let Err(err) = old.scan(&page) {
        println!("- old-fashioned printer: {err}");
    }

    let mut machine = MultiFunctionMachine::new(MyPrinter::new(), MyScanner::new());
    let copy = machine.scan(&page);
    machine.print(&copy);
    println!(
        "- multi-function machine printed {} and scanned {} document(s)",
        machine.printer().printed().len(),
        machine.scanner().scanned().len()
    );
}

fn single_responsibility() -> Result<()> {
    let mut journal = Journal::new();
    journal.add_entry("I play tennis today");
    journal.add_entry("I go shopping in the evening");

    println!("Journal entries:");
    PersistenceManager::save_to_writer(&journal, &mut std::io::stdout().lock())?;
    println!();
    Ok(())
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    tracing::info!("patterns-demo starting");
    singleton();
    open_closed();
    interface_segregation();
    single_responsibility()
}

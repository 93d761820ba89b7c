//! Interface segregation principle: printers and scanners.
//!
//! The fat [`Machine`] trait forces every implementor to provide `print`,
//! `fax` and `scan`, so a device that cannot scan has to fail at runtime
//! ([`OldFashionedPrinter`]). The segregated [`Printer`] and [`Scanner`]
//! traits let each device implement only what it supports, and a
//! [`MultiFunctionMachine`] is assembled from separate components.
//!
//! Devices keep a record of the documents they handled instead of talking
//! to hardware.

use dp_core::{Error, Result};

/// A document handed to a device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Text content.
    pub content: String,
}

impl Document {
    /// Create a document from its text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

// ── Fat interface ─────────────────────────────────────────────────────────────

/// A machine that claims to print, fax and scan.
pub trait Machine {
    /// Print `document`.
    fn print(&mut self, document: &Document) -> Result<()>;

    /// Fax `document`.
    fn fax(&mut self, document: &Document) -> Result<()>;

    /// Scan `document`, returning the scanned copy.
    fn scan(&mut self, document: &Document) -> Result<Document>;
}

/// A machine that really does support all three operations.
#[derive(Debug, Default)]
pub struct MultiFunctionPrinter {
    printed: Vec<Document>,
    faxed: Vec<Document>,
    scanned: Vec<Document>,
}

impl MultiFunctionPrinter {
    /// Create an idle machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents printed so far.
    pub fn printed(&self) -> &[Document] {
        &self.printed
    }

    /// Documents faxed so far.
    pub fn faxed(&self) -> &[Document] {
        &self.faxed
    }

    /// Documents scanned so far.
    pub fn scanned(&self) -> &[Document] {
        &self.scanned
    }
}

impl Machine for MultiFunctionPrinter {
    fn print(&mut self, document: &Document) -> Result<()> {
        self.printed.push(document.clone());
        Ok(())
    }

    fn fax(&mut self, document: &Document) -> Result<()> {
        self.faxed.push(document.clone());
        Ok(())
    }

    fn scan(&mut self, document: &Document) -> Result<Document> {
        self.scanned.push(document.clone());
        Ok(document.clone())
    }
}

/// A printer stuck with the fat interface: it cannot scan.
#[derive(Debug, Default)]
pub struct OldFashionedPrinter {
    printed: Vec<Document>,
    faxed: Vec<Document>,
}

impl OldFashionedPrinter {
    /// Create an idle printer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents printed so far.
    pub fn printed(&self) -> &[Document] {
        &self.printed
    }

    /// Documents faxed so far.
    pub fn faxed(&self) -> &[Document] {
        &self.faxed
    }
}

impl Machine for OldFashionedPrinter {
    fn print(&mut self, document: &Document) -> Result<()> {
        self.printed.push(document.clone());
        Ok(())
    }

    fn fax(&mut self, document: &Document) -> Result<()> {
        self.faxed.push(document.clone());
        Ok(())
    }

    fn scan(&mut self, _document: &Document) -> Result<Document> {
        tracing::warn!("scan requested on a printer without a scanner");
        Err(Error::NotImplemented("printer cannot scan".into()))
    }
}

// ── Segregated interfaces ─────────────────────────────────────────────────────

/// Something that can print.
pub trait Printer {
    /// Print `document`.
    fn print(&mut self, document: &Document);
}

/// Something that can scan.
pub trait Scanner {
    /// Scan `document`, returning the scanned copy.
    fn scan(&mut self, document: &Document) -> Document;
}

/// A device that both prints and scans.
///
/// Implemented for every type that is both a [`Printer`] and a [`Scanner`].
pub trait MultiFunctionDevice: Printer + Scanner {}

impl<T: Printer + Scanner> MultiFunctionDevice for T {}

/// A plain printer. It has no `scan` to get wrong.
#[derive(Debug, Default)]
pub struct MyPrinter {
    printed: Vec<Document>,
}

impl MyPrinter {
    /// Create an idle printer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents printed so far.
    pub fn printed(&self) -> &[Document] {
        &self.printed
    }
}

impl Printer for MyPrinter {
    fn print(&mut self, document: &Document) {
        tracing::trace!(len = document.content.len(), "printing document");
        self.printed.push(document.clone());
    }
}

/// A standalone scanner.
#[derive(Debug, Default)]
pub struct MyScanner {
    scanned: Vec<Document>,
}

impl MyScanner {
    /// Create an idle scanner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents scanned so far.
    pub fn scanned(&self) -> &[Document] {
        &self.scanned
    }
}

impl Scanner for MyScanner {
    fn scan(&mut self, document: &Document) -> Document {
        tracing::trace!(len = document.content.len(), "scanning document");
        self.scanned.push(document.clone());
        document.clone()
    }
}

/// Prints and scans; a single device implementing both small traits.
#[derive(Debug, Default)]
pub struct Photocopier {
    printed: Vec<Document>,
    scanned: Vec<Document>,
}

impl Photocopier {
    /// Create an idle photocopier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan `document` and print the copy.
    pub fn copy(&mut self, document: &Document) -> Document {
        let copy = self.scan(document);
        self.print(&copy);
        copy
    }

    /// Documents printed so far.
    pub fn printed(&self) -> &[Document] {
        &self.printed
    }

    /// Documents scanned so far.
    pub fn scanned(&self) -> &[Document] {
        &self.scanned
    }
}

impl Printer for Photocopier {
    fn print(&mut self, document: &Document) {
        self.printed.push(document.clone());
    }
}

impl Scanner for Photocopier {
    fn scan(&mut self, document: &Document) -> Document {
        self.scanned.push(document.clone());
        document.clone()
    }
}

/// A multi-function device assembled from a separate printer and scanner.
#[derive(Debug, Default)]
pub struct MultiFunctionMachine<P, S> {
    printer: P,
    scanner: S,
}

impl<P: Printer, S: Scanner> MultiFunctionMachine<P, S> {
    /// Combine `printer` and `scanner` into one device.
    pub fn new(printer: P, scanner: S) -> Self {
        Self { printer, scanner }
    }

    /// The printer component.
    pub fn printer(&self) -> &P {
        &self.printer
    }

    /// The scanner component.
    pub fn scanner(&self) -> &S {
        &self.scanner
    }
}

impl<P: Printer, S> Printer for MultiFunctionMachine<P, S> {
    fn print(&mut self, document: &Document) {
        self.printer.print(document);
    }
}

impl<P, S: Scanner> Scanner for MultiFunctionMachine<P, S> {
    fn scan(&mut self, document: &Document) -> Document {
        self.scanner.scan(document)
    }
}

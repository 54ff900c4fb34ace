//! Interactive storefront session.
//!
//! Reads one command per line and maps it onto store transitions and view
//! changes. After every command the current notice is printed and dismissed.
//!
//! # Commands
//!
//! ```text
//! products            list the catalog
//! show <id>           open a product popup
//! add [<id>]          add a product (defaults to the open popup's product)
//! remove <id>         remove a cart line
//! cart                open the cart panel
//! deal                show the deal of the day
//! signin              open the sign-in popup
//! phone <number>      request an OTP
//! otp <code>          verify the OTP
//! signout             sign out (empties the cart)
//! close               close the popup and cart panel
//! support | terms     footer links
//! help                this list
//! quit | exit
//! ```

use std::io::{self, BufRead, Write};

use tokio::sync::watch;
use tracing::debug;

use fresh_farm_core::ProductId;
use fresh_farm_storefront::countdown::Countdown;
use fresh_farm_storefront::services::{CodeGenerator, RandomCodeGenerator};
use fresh_farm_storefront::{Catalog, Deal, SessionCartStore, ViewState};

use super::render;

const PROMPT: &str = "> ";

const USAGE: &str = "\
Commands:
  products            list the catalog
  show <id>           open a product popup
  add [<id>]          add a product (defaults to the open popup's product)
  remove <id>         remove a cart line
  cart                open the cart panel
  deal                show the deal of the day
  signin              open the sign-in popup
  phone <number>      request an OTP
  otp <code>          verify the OTP
  signout             sign out (empties the cart)
  close               close the popup and cart panel
  support | terms     footer links
  help                this list
  quit | exit";

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A storefront session driven from text commands.
pub struct Shell<G = RandomCodeGenerator> {
    store: SessionCartStore<G>,
    catalog: Catalog,
    deal: Deal,
    view: ViewState,
    countdown: Option<watch::Receiver<Countdown>>,
}

impl<G: CodeGenerator> Shell<G> {
    /// Create a shell. `countdown` follows a running deal timer, if any.
    #[must_use]
    pub fn new(
        store: SessionCartStore<G>,
        catalog: Catalog,
        deal: Deal,
        countdown: Option<watch::Receiver<Countdown>>,
    ) -> Self {
        Self {
            store,
            catalog,
            deal,
            view: ViewState::new(),
            countdown,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &SessionCartStore<G> {
        &self.store
    }

    #[must_use]
    pub const fn view(&self) -> &ViewState {
        &self.view
    }

    /// Read commands from `input` until EOF or `quit`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from reading `input` or writing `out`.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> io::Result<()> {
        render::header(&mut out, &self.store)?;
        writeln!(out, "Type `help` for commands.")?;
        write!(out, "{PROMPT}")?;
        out.flush()?;

        for line in input.lines() {
            if self.execute(&line?, &mut out)? == Flow::Quit {
                break;
            }
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    /// Run one command line.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from writing `out`.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> io::Result<Flow> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Flow::Continue);
        };
        let arg = words.next();
        debug!(command, "Shell command");

        match (command, arg) {
            ("quit" | "exit", _) => return Ok(Flow::Quit),
            ("help", _) => writeln!(out, "{USAGE}")?,
            ("products", _) => render::products(out, &self.catalog)?,
            ("show", Some(id)) => self.show(&ProductId::new(id), out)?,
            ("add", id) => self.add(id, out)?,
            ("remove", Some(id)) => {
                self.store.remove_from_cart(&ProductId::new(id));
                self.print_cart(out)?;
            }
            ("cart", _) => {
                self.view.open_cart();
                self.print_cart(out)?;
            }
            ("deal", _) => render::deal(out, &self.deal, self.remaining())?,
            ("signin", _) => {
                self.view.open_auth();
                render::auth_step(out, self.store.auth_step())?;
            }
            // The phone and code are passed through untouched so validation
            // sees exactly what was typed after the command word.
            ("phone", _) => self.store.request_otp(rest_of(line, command)),
            ("otp", _) => self.store.verify_otp(rest_of(line, command)),
            ("signout", _) => {
                self.store.sign_out();
                render::header(out, &self.store)?;
            }
            ("close", _) => {
                self.view.close_popup();
                self.view.close_cart();
            }
            ("support", _) => self.store.show_help(),
            ("terms", _) => self.store.show_terms(),
            _ => writeln!(out, "Unknown command: {line}. Type `help` for commands.")?,
        }

        if let Some(notice) = self.store.dismiss_notice() {
            render::notice(out, &notice)?;
        }
        Ok(Flow::Continue)
    }

    fn show(&mut self, id: &ProductId, out: &mut impl Write) -> io::Result<()> {
        match self.catalog.resolve(id) {
            Some(product) => {
                render::product_detail(out, product)?;
                self.view.open_product(product.clone());
            }
            None => writeln!(out, "No product {id}")?,
        }
        Ok(())
    }

    fn add(&mut self, id: Option<&str>, out: &mut impl Write) -> io::Result<()> {
        let id = match (id, self.view.popup.product()) {
            (Some(id), _) => ProductId::new(id),
            (None, Some(product)) => product.id.clone(),
            (None, None) => {
                writeln!(out, "Usage: add <id> (or `show <id>` first)")?;
                return Ok(());
            }
        };
        self.store.add_to_cart(&id);
        render::header(out, &self.store)
    }

    fn print_cart(&self, out: &mut impl Write) -> io::Result<()> {
        render::cart(out, &self.store.cart_view(&self.catalog))
    }

    fn remaining(&self) -> Countdown {
        self.countdown
            .as_ref()
            .map_or(self.deal.countdown, |rx| *rx.borrow())
    }
}

/// Everything after the command word, without the separating space.
fn rest_of<'a>(line: &'a str, command: &str) -> &'a str {
    let trimmed = line.trim_start();
    let rest = trimmed.strip_prefix(command).unwrap_or(trimmed);
    rest.strip_prefix(' ').unwrap_or(rest)
}

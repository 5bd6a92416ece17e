//! The interactive shop menu.
//!
//! The loop only talks to the user through a [`Prompter`], so the terminal
//! front end and the tests drive exactly the same logic.

use std::io::{BufRead, IsTerminal};

use anyhow::{Context as _, Result};
use chrono::Local;
use dialoguer::Input;
use shopfloor_commerce::cart::Cart;
use shopfloor_commerce::ids::ProductId;
use shopfloor_commerce::storage::Inventory;
use shopfloor_commerce::CommerceError;
use tracing::debug;

use crate::output::Output;

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Header,
    Success,
    Warn,
}

/// Line-oriented user interaction.
pub trait Prompter {
    /// Ask for one line of input. `None` means the input has ended.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>>;

    /// Show a message.
    fn say(&mut self, tone: Tone, text: &str);

    /// Ask a yes/no question. Only `y` (any case) counts as yes; end of input
    /// is a no.
    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let answer = self.ask(prompt)?;
        Ok(answer.is_some_and(|a| a.trim().eq_ignore_ascii_case("y")))
    }
}

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    ShowProducts,
    AddToCart,
    ViewCart,
    Checkout,
    Exit,
}

impl MenuChoice {
    /// All entries in display order.
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::ShowProducts,
        MenuChoice::AddToCart,
        MenuChoice::ViewCart,
        MenuChoice::Checkout,
        MenuChoice::Exit,
    ];

    /// Number typed to pick this entry.
    pub fn key(&self) -> &'static str {
        match self {
            MenuChoice::ShowProducts => "1",
            MenuChoice::AddToCart => "2",
            MenuChoice::ViewCart => "3",
            MenuChoice::Checkout => "4",
            MenuChoice::Exit => "5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::ShowProducts => "Show products",
            MenuChoice::AddToCart => "Add to cart",
            MenuChoice::ViewCart => "View cart",
            MenuChoice::Checkout => "Checkout",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Parse a typed choice.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.into_iter().find(|c| c.key() == input)
    }
}

/// One shopping session: the loaded store plus a cart that lives until exit.
pub struct Menu<'a, P: Prompter> {
    inventory: &'a mut Inventory,
    cart: Cart,
    prompter: P,
    unit: String,
}

impl<'a, P: Prompter> Menu<'a, P> {
    pub fn new(inventory: &'a mut Inventory, prompter: P, unit: impl Into<String>) -> Self {
        Self {
            inventory,
            cart: Cart::new(),
            prompter,
            unit: unit.into(),
        }
    }

    /// The session cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.prompter.say(Tone::Header, "Online Store");
            for choice in MenuChoice::ALL {
                let line = format!("{}. {}", choice.key(), choice.label());
                self.prompter.say(Tone::Plain, &line);
            }

            let Some(input) = self.prompter.ask("Please choose an option")? else {
                break;
            };

            let choice = MenuChoice::parse(&input);
            debug!(input = input.trim(), ?choice, "menu choice");

            match choice {
                Some(MenuChoice::ShowProducts) => self.show_products(),
                Some(MenuChoice::AddToCart) => self.add_to_cart()?,
                Some(MenuChoice::ViewCart) => self.view_cart()?,
                Some(MenuChoice::Checkout) => self.checkout()?,
                Some(MenuChoice::Exit) => break,
                None => self.prompter.say(Tone::Warn, "Invalid option!"),
            }
        }

        self.prompter.say(Tone::Plain, "Thank you for shopping with us!");
        Ok(())
    }

    fn show_products(&mut self) {
        self.prompter.say(Tone::Header, "Available products:");
        let lines: Vec<String> = self
            .inventory
            .catalog()
            .iter()
            .map(|p| p.listing(&self.unit))
            .collect();
        for line in &lines {
            self.prompter.say(Tone::Plain, line);
        }
    }

    fn add_to_cart(&mut self) -> Result<()> {
        self.show_products();

        let Some(raw_id) = self.prompter.ask("Product id")? else {
            return Ok(());
        };
        let Some(raw_qty) = self.prompter.ask("Quantity")? else {
            return Ok(());
        };

        let (Ok(product_id), Ok(quantity)) =
            (raw_id.parse::<ProductId>(), raw_qty.trim().parse::<u32>())
        else {
            self.prompter.say(Tone::Warn, "Invalid input!");
            return Ok(());
        };

        let Some(product) = self.inventory.catalog().get(product_id) else {
            self.prompter.say(Tone::Warn, "Product not found!");
            return Ok(());
        };

        match self.cart.try_add(product, quantity) {
            Ok(_) => {
                let msg = format!("Added {} x {} to the cart.", quantity, product.name);
                self.prompter.say(Tone::Success, &msg);
            }
            Err(CommerceError::InsufficientStock { .. }) => {
                self.prompter.say(Tone::Warn, "Not enough stock!");
            }
            Err(CommerceError::InvalidQuantity(_)) => {
                self.prompter.say(Tone::Warn, "Invalid input!");
            }
            Err(e) => return Err(e.into()),
        }
        Ok(())
    }

    fn view_cart(&mut self) -> Result<()> {
        if self.cart.is_empty() {
            self.prompter.say(Tone::Plain, "Your cart is empty.");
            return Ok(());
        }

        let pricing = self.cart.price(self.inventory.catalog())?;
        self.prompter.say(Tone::Header, "Your cart:");
        for line in &pricing.lines {
            self.prompter.say(Tone::Plain, &line.summary(&self.unit));
        }
        let total = format!("Total: {} {}", pricing.total, self.unit);
        self.prompter.say(Tone::Plain, &total);
        Ok(())
    }

    fn checkout(&mut self) -> Result<()> {
        if self.cart.is_empty() {
            self.prompter.say(Tone::Plain, "Your cart is empty.");
            return Ok(());
        }

        self.view_cart()?;
        let confirmed = self.prompter.confirm("Proceed to payment? (y/n)")?;
        debug!(confirmed, items = self.cart.item_count(), "payment confirmation");

        if !confirmed {
            self.prompter.say(Tone::Warn, "Payment cancelled.");
            return Ok(());
        }

        match self.inventory.checkout(&mut self.cart, Local::now()) {
            Ok(receipt) => {
                let msg = format!(
                    "Payment successful! Order #{} has been placed.",
                    receipt.order.id
                );
                self.prompter.say(Tone::Success, &msg);
                Ok(())
            }
            Err(CommerceError::InsufficientStock { product_id, .. }) => {
                let msg = format!("Not enough stock for product {}!", product_id);
                self.prompter.say(Tone::Warn, &msg);
                Ok(())
            }
            Err(e) => Err(e).context("Checkout failed"),
        }
    }
}

/// Prompter for a real terminal, falling back to plain stdin lines when input
/// is piped.
///
/// Prompts are printed even when `--json` is set.
pub struct TermPrompter {
    output: Output,
    interactive: bool,
}

impl TermPrompter {
    pub fn new(output: Output) -> Self {
        Self {
            output: output.without_json(),
            interactive: std::io::stdin().is_terminal(),
        }
    }
}

impl Prompter for TermPrompter {
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        if self.interactive {
            let answer: String = Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            return Ok(Some(answer));
        }

        self.output.line(&format!("{}: ", prompt));
        let mut buf = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut buf)
            .context("Failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&mut self, tone: Tone, text: &str) {
        match tone {
            Tone::Plain => self.output.line(text),
            Tone::Header => self.output.header(text),
            Tone::Success => self.output.success(text),
            Tone::Warn => self.output.warn(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfloor_commerce::catalog::Catalog;
    use shopfloor_db::JsonStore;
    use std::collections::VecDeque;
    use tempfile::TempDir;

    /// Feeds canned answers and records everything shown.
    #[derive(Default)]
    struct Script {
        answers: VecDeque<String>,
        shown: Vec<(Tone, String)>,
    }

    impl Script {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|s| s.to_string()).collect(),
                shown: Vec::new(),
            }
        }

        fn saw(&self, text: &str) -> bool {
            self.shown.iter().any(|(_, t)| t == text)
        }
    }

    impl Prompter for &mut Script {
        fn ask(&mut self, _prompt: &str) -> Result<Option<String>> {
            Ok(self.answers.pop_front())
        }

        fn say(&mut self, tone: Tone, text: &str) {
            self.shown.push((tone, text.to_string()));
        }
    }

    fn seeded(dir: &TempDir) -> Inventory {
        let mut inv =
            Inventory::open(JsonStore::open(dir.path().join("store_data.json"))).unwrap();
        inv.seed_samples_if_empty().unwrap();
        inv
    }

    fn run_script(inv: &mut Inventory, answers: &[&str]) -> (Script, Cart) {
        let mut script = Script::new(answers);
        let cart = {
            let mut menu = Menu::new(inv, &mut script, "Toman");
            menu.run().unwrap();
            menu.cart().clone()
        };
        (script, cart)
    }

    #[test]
    fn test_term_prompter_ignores_json_mode() {
        let prompter = TermPrompter::new(Output::new(false, true));
        assert!(!prompter.output.is_json());
    }

    #[test]
    fn test_confirm_accepts_only_y() {
        let mut script = Script::new(&["Y", " y ", "yes", "n", ""]);
        let mut prompter = &mut script;
        assert!(prompter.confirm("Proceed?").unwrap());
        assert!(prompter.confirm("Proceed?").unwrap());
        assert!(!prompter.confirm("Proceed?").unwrap());
        assert!(!prompter.confirm("Proceed?").unwrap());
        assert!(!prompter.confirm("Proceed?").unwrap());
        // input exhausted
        assert!(!prompter.confirm("Proceed?").unwrap());
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse(" 1 "), Some(MenuChoice::ShowProducts));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
    }

    #[test]
    fn test_show_products_and_exit() {
        let dir = TempDir::new().unwrap();
        let mut inv = seeded(&dir);
        let (script, _) = run_script(&mut inv, &["1", "5"]);

        assert!(script.saw("1: Laptop - 25000000 Toman (10 in stock)"));
        assert!(script.saw("3: Headphones - 3000000 Toman (20 in stock)"));
        assert!(script.saw("Thank you for shopping with us!"));
    }

    #[test]
    fn test_invalid_option() {
        let dir = TempDir::new().unwrap();
        let mut inv = seeded(&dir);
        let (script, _) = run_script(&mut inv, &["9", "5"]);
        assert!(script.saw("Invalid option!"));
    }

    #[test]
    fn test_end_of_input_exits() {
        let dir = TempDir::new().unwrap();
        let mut inv = seeded(&dir);
        let (script, _) = run_script(&mut inv, &[]);
        assert!(script.saw("Thank you for shopping with us!"));
    }

    #[test]
    fn test_add_to_cart_outcomes() {
        let dir = TempDir::new().unwrap();
        let mut inv = seeded(&dir);
        let (script, cart) = run_script(
            &mut inv,
            &[
                "2", "1", "2", // ok
                "2", "x", "1", // bad id
                "2", "2", "-3", // bad quantity
                "2", "42", "1", // unknown product
                "2", "1", "9", // 2 + 9 > 10
                "5",
            ],
        );

        assert!(script.saw("Added 2 x Laptop to the cart."));
        assert_eq!(
            script.shown.iter().filter(|(_, t)| t == "Invalid input!").count(),
            2
        );
        assert!(script.saw("Product not found!"));
        assert!(script.saw("Not enough stock!"));
        assert_eq!(cart.quantity_of(ProductId::new(1)), 2);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_view_cart() {
        let dir = TempDir::new().unwrap();
        let mut inv = seeded(&dir);
        let (script, _) = run_script(&mut inv, &["3", "2", "2", "2", "3", "5"]);

        assert!(script.saw("Your cart is empty."));
        assert!(script.saw("Mobile - 2 pcs - 30000000 Toman"));
        assert!(script.saw("Total: 30000000 Toman"));
    }

    #[test]
    fn test_checkout_empty_cart() {
        let dir = TempDir::new().unwrap();
        let mut inv = seeded(&dir);
        let (script, _) = run_script(&mut inv, &["4", "5"]);
        assert!(script.saw("Your cart is empty."));
        assert!(inv.orders().is_empty());
    }

    #[test]
    fn test_checkout_cancelled_keeps_cart() {
        let dir = TempDir::new().unwrap();
        let mut inv = seeded(&dir);
        let (script, cart) = run_script(&mut inv, &["2", "3", "4", "4", "n", "5"]);

        assert!(script.saw("Payment cancelled."));
        assert_eq!(cart.quantity_of(ProductId::new(3)), 4);
        assert!(inv.orders().is_empty());
        assert_eq!(inv.catalog(), &Catalog::sample());
    }

    #[test]
    fn test_checkout_confirmed_persists_order() {
        let dir = TempDir::new().unwrap();
        let mut inv = seeded(&dir);
        let (script, cart) = run_script(
            &mut inv,
            &["2", "1", "1", "2", "3", "2", "4", "Y", "5"],
        );

        assert!(script.saw("Payment successful! Order #1 has been placed."));
        assert!(cart.is_empty());

        let reopened =
            Inventory::open(JsonStore::open(dir.path().join("store_data.json"))).unwrap();
        assert_eq!(reopened.orders().len(), 1);
        assert_eq!(reopened.orders()[0].total.amount(), 31_000_000);
        assert_eq!(
            reopened.catalog().get(ProductId::new(1)).unwrap().quantity,
            9
        );
        assert_eq!(
            reopened.catalog().get(ProductId::new(3)).unwrap().quantity,
            18
        );
    }
}

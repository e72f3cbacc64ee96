//! Line-oriented terminal rendering of the form view.
//!
//! The page is redrawn after every action: the three forms with their current
//! draft values, then the product list. Picking a form walks its fields one
//! prompt at a time and submits it. An empty answer keeps the shown value and
//! a lone `-` clears the field.

use std::io::{self, Write};

use crate::api::StorefrontApi;
use crate::controller::FormController;
use crate::notify::Notifier;

const TITLE: &str = "E-commerce Platform Test";
const MENU: &str = "[1] Add Product  [2] Update Stock  [3] Place Order  [r] Redraw  [q] Quit";
const CLEAR: &str = "-";

/// Lines from stdin, read one at a time so alerts can share the same stream.
pub fn stdin_lines() -> impl Iterator<Item = io::Result<String>> {
    std::iter::from_fn(|| {
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Some(Ok(line))
            }
            Err(err) => Some(Err(err)),
        }
    })
}

pub struct Shell<I, W> {
    input: I,
    output: W,
}

impl<I, W> Shell<I, W>
where
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `q` or end of input.
    pub async fn run<A, N>(&mut self, controller: &mut FormController<A, N>) -> io::Result<()>
    where
        A: StorefrontApi,
        N: Notifier,
    {
        self.render(controller)?;

        loop {
            write!(self.output, "{MENU}\n> ")?;
            self.output.flush()?;

            let Some(line) = self.next_line()? else {
                break;
            };

            match line.trim() {
                "1" => {
                    if self.edit_product(controller)? {
                        controller.submit_product().await;
                    }
                }
                "2" => {
                    if self.edit_stock(controller)? {
                        controller.submit_stock().await;
                    }
                }
                "3" => {
                    if self.edit_order(controller)? {
                        controller.submit_order().await;
                    }
                }
                "" | "r" => {}
                "q" => break,
                other => writeln!(self.output, "Unknown choice: {other}")?,
            }

            self.render(controller)?;
        }

        Ok(())
    }

    /// Draw the whole page.
    pub fn render<A, N>(&mut self, controller: &FormController<A, N>) -> io::Result<()> {
        let out = &mut self.output;
        writeln!(out)?;
        writeln!(out, "{TITLE}")?;
        writeln!(out, "{}", "=".repeat(TITLE.len()))?;

        let product = controller.product_draft();
        writeln!(out)?;
        writeln!(out, "Create Product")?;
        writeln!(
            out,
            "  SKU: {}  Name: {}  Price: {}",
            product.sku, product.name, product.price
        )?;

        let stock = controller.stock_draft();
        writeln!(out)?;
        writeln!(out, "Update Stock")?;
        writeln!(out, "  SKU: {}  Quantity: {}", stock.sku, stock.quantity)?;

        let order = controller.order_draft();
        writeln!(out)?;
        writeln!(out, "Place Order")?;
        if let Some(line) = order.items.first() {
            writeln!(
                out,
                "  Item SKU: {}  Quantity: {}  Total: {}",
                line.sku, line.quantity, order.total
            )?;
        }

        writeln!(out)?;
        writeln!(out, "Products")?;
        for p in controller.products() {
            writeln!(out, "  - {p}")?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        self.input.next().transpose()
    }

    /// Prompt for one field. `None` means input ended.
    fn ask(&mut self, label: &str, current: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label} [{current}]: ")?;
        self.output.flush()?;

        Ok(self.next_line()?.map(|answer| match answer.as_str() {
            "" => current.to_string(),
            CLEAR => String::new(),
            _ => answer,
        }))
    }

    /// Returns `false` when input ended before the form was complete.
    fn edit_product<A, N>(&mut self, controller: &mut FormController<A, N>) -> io::Result<bool> {
        let draft = controller.product_draft().clone();

        let Some(sku) = self.ask("SKU", &draft.sku)? else {
            return Ok(false);
        };
        controller.set_product_sku(sku);

        let Some(name) = self.ask("Name", &draft.name)? else {
            return Ok(false);
        };
        controller.set_product_name(name);

        let Some(price) = self.ask("Price", &draft.price)? else {
            return Ok(false);
        };
        controller.set_product_price(price);

        Ok(true)
    }

    fn edit_stock<A, N>(&mut self, controller: &mut FormController<A, N>) -> io::Result<bool> {
        let draft = controller.stock_draft().clone();

        let Some(sku) = self.ask("SKU", &draft.sku)? else {
            return Ok(false);
        };
        controller.set_stock_sku(sku);

        let Some(quantity) = self.ask("Quantity", &draft.quantity)? else {
            return Ok(false);
        };
        controller.set_stock_quantity(quantity);

        Ok(true)
    }

    fn edit_order<A, N>(&mut self, controller: &mut FormController<A, N>) -> io::Result<bool> {
        let draft = controller.order_draft().clone();
        let line = draft.items.first().cloned().unwrap_or_default();

        let Some(sku) = self.ask("Item SKU", &line.sku)? else {
            return Ok(false);
        };
        controller.set_order_sku(sku);

        let Some(quantity) = self.ask("Quantity", &line.quantity)? else {
            return Ok(false);
        };
        controller.set_order_quantity(quantity);

        let Some(total) = self.ask("Total", &draft.total)? else {
            return Ok(false);
        };
        controller.set_order_total(total);

        Ok(true)
    }
}

use colored::Colorize;
use shopfront::api::{CmdMessage, MessageLevel};
use shopfront::config::ShopConfig;
use shopfront::model::{Availability, Badge, CartLine, Product, Totals};
use shopfront::money::{format_amount, format_with_glyph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 32;
const CATEGORY_WIDTH: usize = 14;
const PRICE_WIDTH: usize = 14;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_products(products: &[Product], glyph: &str) {
    for product in products {
        let id = format!("{:>4}. ", product.id);
        let name = pad_to_width(&truncate_to_width(&product.name, NAME_WIDTH), NAME_WIDTH);
        let category =
            pad_to_width(&truncate_to_width(&product.category, CATEGORY_WIDTH), CATEGORY_WIDTH);
        let price = format!(
            "{:>width$}",
            format_with_glyph(product.price, glyph),
            width = PRICE_WIDTH
        );

        let badge = match product.badge() {
            Some(Badge::Sold) => Badge::Sold.label().red().bold(),
            Some(Badge::New) => Badge::New.label().cyan().bold(),
            Some(Badge::Sale) => Badge::Sale.label().yellow().bold(),
            None => "".normal(),
        };
        let status = match product.availability() {
            Availability::Available => "".normal(),
            Availability::OutOfStock => "Out of Stock".dimmed(),
            Availability::Sold => "".normal(),
        };

        println!(
            "{}{} {} {}  {:<4} {}",
            id.dimmed(),
            name,
            category.dimmed(),
            price,
            badge,
            status
        );
    }
}

pub(super) fn print_categories(categories: &[&str]) {
    if categories.is_empty() {
        println!("{}", "No categories found.".dimmed());
        return;
    }
    for category in categories {
        println!("{}", category);
    }
}

pub(super) fn print_cart(lines: &[CartLine], totals: &Totals, glyph: &str, can_checkout: bool) {
    if lines.is_empty() {
        return;
    }

    for line in lines {
        let name = pad_to_width(&truncate_to_width(&line.name, NAME_WIDTH), NAME_WIDTH);
        println!(
            "{}{} {} x {:<4} {:>width$}",
            format!("{:>4}. ", line.product_id).dimmed(),
            name,
            format_with_glyph(line.price, glyph),
            line.quantity,
            format_with_glyph(line.line_total(), glyph),
            width = PRICE_WIDTH
        );
    }

    println!();
    print_total_row("Items", &totals.item_count.to_string());
    print_total_row("Subtotal", &format_with_glyph(totals.subtotal, glyph));
    print_total_row("Shipping", &format_with_glyph(totals.shipping_fee, glyph));
    print_total_row(
        "Total",
        &format!("{}{}", glyph, format_amount(totals.grand_total)).bold().to_string(),
    );

    if can_checkout {
        println!();
        println!("{}", "Run `shopfront checkout` to pay.".dimmed());
    }
}

pub(super) fn print_config(config: &ShopConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key, value);
    }
}

fn print_total_row(label: &str, value: &str) {
    println!("{:>12}  {}", label.dimmed(), value);
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("Tote", 10), "Tote");
    }

    #[test]
    fn long_text_gets_ellipsis_within_width() {
        let out = truncate_to_width("Hand-woven Aso Oke Fabric", 10);
        assert!(out.ends_with('…'));
        assert!(out.width() <= 10);
    }

    #[test]
    fn padding_uses_display_width() {
        assert_eq!(pad_to_width("₦", 3).width(), 3);
    }
}

//! Cached selectors for the quotation portal markup.
//!
//! The product table and its row markers are the stable structural anchors
//! of the page; everything else is located relative to them or by text.

use lazy_static::lazy_static;
use scraper::Selector;

lazy_static! {
    // Product table rows
    pub static ref PRODUCT_ROWS: Selector =
        Selector::parse(r#"#sales_order_table tbody tr[name="tr_product"]"#).unwrap();
    pub static ref PRODUCT_NAME: Selector =
        Selector::parse(r#"[name="td_product_name"]"#).unwrap();
    pub static ref QUANTITY_SPANS: Selector =
        Selector::parse(r#"[name="td_product_quantity"] span"#).unwrap();
    pub static ref UNIT_PRICE_VALUE: Selector =
        Selector::parse(r#"[name="td_product_priceunit"] .oe_currency_value"#).unwrap();
    pub static ref SUBTOTAL_VALUE: Selector =
        Selector::parse(r#"[name="td_product_subtotal"] .oe_currency_value"#).unwrap();

    // Subscription info table
    pub static ref SALE_INFO_TITLE: Selector = Selector::parse("#sale_info_title").unwrap();
    pub static ref TABLE: Selector = Selector::parse("table").unwrap();
    pub static ref TABLE_ROW: Selector = Selector::parse("tr").unwrap();
    pub static ref ROW_HEADER: Selector = Selector::parse("th").unwrap();
    pub static ref VALUE_SPAN: Selector = Selector::parse("td span").unwrap();
    pub static ref VALUE_EM: Selector = Selector::parse("td em").unwrap();
    pub static ref VALUE_CELL: Selector = Selector::parse("td").unwrap();

    // Grand total
    pub static ref TOTALS_VALUE: Selector = Selector::parse(
        r#"table[name="sale_order_totals_table"] tr.o_total span.oe_currency_value"#
    ).unwrap();

    // Section-based lookup
    pub static ref SECTION: Selector = Selector::parse("section").unwrap();
    pub static ref SECTION_TITLE: Selector = Selector::parse("h4").unwrap();
    pub static ref PARAGRAPH: Selector = Selector::parse("p").unwrap();
}

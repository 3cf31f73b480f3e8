pub mod add_item_form;
pub mod estimate_table;
pub mod kpi_card;
pub mod markup_settings;
pub mod notices;

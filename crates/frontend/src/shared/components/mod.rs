pub mod pagination_controls;
pub mod record_fields;
pub mod sub_item_list;

mod display_select;
mod external_view;
mod header;
mod list_tabs;
mod task_items;

pub use display_select::DisplaySelect;
pub use external_view::ExternalView;
pub use header::Header;
pub use list_tabs::ListTabs;
pub use task_items::TaskItems;

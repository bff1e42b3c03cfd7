pub use super::banner::Entity as Banner;
pub use super::case::Entity as Case;
pub use super::chapter::Entity as Chapter;
pub use super::how_work_block_settings::Entity as HowWorkBlockSettings;
pub use super::media::Entity as Media;
pub use super::menu::Entity as Menu;
pub use super::page::Entity as Page;
pub use super::product::Entity as Product;
pub use super::product_service::Entity as ProductService;
pub use super::seo_settings::Entity as SeoSettings;
pub use super::service::Entity as Service;
pub use super::telegram_settings::Entity as TelegramSettings;

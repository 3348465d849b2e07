pub use super::address::Entity as Address;
pub use super::order::Entity as Order;
pub use super::order_detail::Entity as OrderDetail;
pub use super::product::Entity as Product;
pub use super::user::Entity as User;
pub use super::voucher::Entity as Voucher;

pub mod discounts;
pub mod escalation;
pub mod milestones;
pub mod product;
pub mod quote;
pub mod referrer;
pub mod sku;
pub mod travel;

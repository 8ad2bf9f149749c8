pub mod asset;
pub mod asset_info;

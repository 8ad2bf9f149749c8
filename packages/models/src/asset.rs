use cosmwasm_schema::cw_serde;
use cosmwasm_std::{CosmosMsg, StdResult, Uint128};

use super::asset_info::AssetInfo;

#[cw_serde]
pub struct Asset {
    pub info: AssetInfo,
    pub amount: Uint128,
}

impl Asset {
    /// Returns a CW20 transfer or bank send message.
    pub fn to_send_msg(&self, recipient: String) -> StdResult<CosmosMsg> {
        self.info.to_send_msg(recipient, self.amount)
    }
}

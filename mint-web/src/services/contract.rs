//! Collection contract bindings
//!
//! ABI encoding comes from the `sol!` interface below; transport is the
//! wallet provider (`eth_call` for reads, `eth_sendTransaction` for mints).

use alloy_primitives::{B256, U256};
use alloy_sol_types::{sol, SolCall};
use gloo_timers::future::TimeoutFuture;
use shared::dto::{decode_data, to_data, to_quantity, CallRequest, TransactionReceipt, TransactionRequest};
use shared::error::DappError;
use shared::status::{ContractSnapshot, MintKind};

use crate::services::ethereum;
use crate::utils::constants::RECEIPT_POLL_INTERVAL_MS;

sol! {
    interface ICollection {
        function totalSupply() external view returns (uint256);
        function maxSupply() external view returns (uint256);
        function maxFree() external view returns (uint256);
        function maxperAddressPublicMint() external view returns (uint256);
        function maxperAddressFreeLimit() external view returns (uint256);
        function cost() external view returns (uint256);
        function paused() external view returns (bool);
        function whitelistMintEnabled() external view returns (bool);

        function mint(uint256 _mintAmount) external payable;
        function mintFree(uint256 _mintAmount) external payable;
        function whitelistMint(uint256 _mintAmount, bytes32[] calldata _merkleProof) external payable;
    }
}

/// Handle on the deployed collection contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionContract {
    address: String,
}

fn to_u64(value: U256, what: &str) -> Result<u64, DappError> {
    u64::try_from(value).map_err(|_| DappError::decode(what, "value does not fit in u64"))
}

/// Calldata for a mint through the given path.
pub fn mint_calldata(kind: MintKind, amount: u64, proof: Vec<B256>) -> Vec<u8> {
    let amount = U256::from(amount);
    match kind {
        MintKind::Public => ICollection::mintCall { _mintAmount: amount }.abi_encode(),
        MintKind::Free => ICollection::mintFreeCall { _mintAmount: amount }.abi_encode(),
        MintKind::Whitelist => ICollection::whitelistMintCall {
            _mintAmount: amount,
            _merkleProof: proof,
        }
        .abi_encode(),
    }
}

impl CollectionContract {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    /// True when bytecode exists at the configured address on the current chain.
    pub async fn is_deployed(&self) -> Result<bool, DappError> {
        let code = ethereum::get_code(&self.address).await?;
        Ok(!decode_data(&code)?.is_empty())
    }

    async fn call<C: SolCall>(&self, call: C) -> Result<C::Return, DappError> {
        let request = CallRequest {
            to: self.address.clone(),
            data: to_data(&call.abi_encode()),
        };
        let raw: String = ethereum::request("eth_call", &(request, "latest")).await?;
        let bytes = decode_data(&raw)?;
        C::abi_decode_returns(&bytes, true).map_err(|e| DappError::decode(C::SIGNATURE, e))
    }

    pub async fn total_supply(&self) -> Result<u64, DappError> {
        let ret = self.call(ICollection::totalSupplyCall {}).await?;
        to_u64(ret._0, "totalSupply")
    }

    pub async fn max_supply(&self) -> Result<u64, DappError> {
        let ret = self.call(ICollection::maxSupplyCall {}).await?;
        to_u64(ret._0, "maxSupply")
    }

    pub async fn max_free(&self) -> Result<u64, DappError> {
        let ret = self.call(ICollection::maxFreeCall {}).await?;
        to_u64(ret._0, "maxFree")
    }

    pub async fn max_mint_amount_per_tx(&self) -> Result<u64, DappError> {
        let ret = self.call(ICollection::maxperAddressPublicMintCall {}).await?;
        to_u64(ret._0, "maxperAddressPublicMint")
    }

    pub async fn max_free_mint_amount_per_tx(&self) -> Result<u64, DappError> {
        let ret = self.call(ICollection::maxperAddressFreeLimitCall {}).await?;
        to_u64(ret._0, "maxperAddressFreeLimit")
    }

    pub async fn cost(&self) -> Result<U256, DappError> {
        Ok(self.call(ICollection::costCall {}).await?._0)
    }

    pub async fn paused(&self) -> Result<bool, DappError> {
        Ok(self.call(ICollection::pausedCall {}).await?._0)
    }

    pub async fn whitelist_mint_enabled(&self) -> Result<bool, DappError> {
        Ok(self.call(ICollection::whitelistMintEnabledCall {}).await?._0)
    }

    /// Read every field the UI shows, one call after another.
    pub async fn read_snapshot(&self) -> Result<ContractSnapshot, DappError> {
        Ok(ContractSnapshot {
            max_supply: self.max_supply().await?,
            max_free: self.max_free().await?,
            total_supply: self.total_supply().await?,
            max_mint_amount_per_tx: self.max_mint_amount_per_tx().await?,
            max_free_mint_amount_per_tx: self.max_free_mint_amount_per_tx().await?,
            token_price: self.cost().await?,
            is_paused: self.paused().await?,
            is_whitelist_mint_enabled: self.whitelist_mint_enabled().await?,
        })
    }

    /// Submit a mint and return the transaction hash.
    pub async fn send_mint(
        &self,
        from: &str,
        kind: MintKind,
        amount: u64,
        value: U256,
        proof: Vec<B256>,
    ) -> Result<String, DappError> {
        let tx = TransactionRequest {
            from: from.to_string(),
            to: self.address.clone(),
            data: to_data(&mint_calldata(kind, amount, proof)),
            value: Some(to_quantity(value)),
        };
        log::info!("Submitting {:?} mint of {} token(s)", kind, amount);
        ethereum::request("eth_sendTransaction", &[tx]).await
    }
}

/// Poll until the transaction is mined. A reverted receipt is an error.
pub async fn wait_for_receipt(hash: &str) -> Result<TransactionReceipt, DappError> {
    loop {
        let receipt: Option<TransactionReceipt> =
            ethereum::request("eth_getTransactionReceipt", &[hash]).await?;

        if let Some(receipt) = receipt {
            if receipt.succeeded() {
                return Ok(receipt);
            }
            return Err(DappError::Reverted(receipt.transaction_hash));
        }

        TimeoutFuture::new(RECEIPT_POLL_INTERVAL_MS).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selectors() {
        assert_eq!(ICollection::mintCall::SELECTOR, [0xa0, 0x71, 0x2d, 0x68]);
        assert_eq!(ICollection::totalSupplyCall::SELECTOR, [0x18, 0x16, 0x0d, 0xdd]);
        assert_eq!(ICollection::pausedCall::SELECTOR, [0x5c, 0x97, 0x5a, 0xbb]);
    }

    #[test]
    fn test_mint_calldata_layout() {
        let data = mint_calldata(MintKind::Public, 3, Vec::new());
        assert_eq!(data.len(), 4 + 32);
        assert_eq!(&data[..4], &ICollection::mintCall::SELECTOR);
        assert_eq!(data[35], 3);

        let free = mint_calldata(MintKind::Free, 2, Vec::new());
        assert_eq!(&free[..4], &ICollection::mintFreeCall::SELECTOR);
    }

    #[test]
    fn test_whitelist_calldata_carries_proof() {
        let proof = vec![B256::repeat_byte(1), B256::repeat_byte(2)];
        let data = mint_calldata(MintKind::Whitelist, 1, proof.clone());
        assert_eq!(&data[..4], &ICollection::whitelistMintCall::SELECTOR);
        // amount, offset, length, two elements
        assert_eq!(data.len(), 4 + 32 * 5);

        let decoded = ICollection::whitelistMintCall::abi_decode(&data, true).unwrap();
        assert_eq!(decoded._mintAmount, U256::from(1));
        assert_eq!(decoded._merkleProof, proof);
    }

    #[test]
    fn test_decode_uint_return() {
        let mut word = [0u8; 32];
        word[31] = 42;
        let ret = ICollection::totalSupplyCall::abi_decode_returns(&word, true).unwrap();
        assert_eq!(to_u64(ret._0, "totalSupply").unwrap(), 42);
    }

    #[test]
    fn test_to_u64_overflow() {
        assert!(to_u64(U256::MAX, "maxSupply").is_err());
    }
}

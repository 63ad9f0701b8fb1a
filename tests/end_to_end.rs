//! Builds, signs and sends transactions through the JSON-RPC client against
//! an in-memory node.

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use neo_tx::core::{CoreError, WitnessCondition};
use neo_tx::crypto::ECDsa;
use neo_tx::prelude::*;
use neo_tx::rpc_client::{Error, RpcError, RpcRequest, RpcResponse, Transport};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

const MAGIC: u32 = 894_710_606;

/// Answers the methods the transaction builder uses.
struct Node {
    balance: &'static str,
    requests: Mutex<Vec<RpcRequest>>,
}

impl Node {
    fn new(balance: &'static str) -> Self {
        Self {
            balance,
            requests: Mutex::new(Vec::new()),
        }
    }

    fn methods(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.method.clone())
            .collect()
    }

    fn answer(&self, request: &RpcRequest) -> Value {
        match request.method.as_str() {
            "getblockcount" => json!(2000),
            "invokescript" => json!({
                "script": request.params[0],
                "state": "HALT",
                "gasconsumed": "999972",
                "stack": []
            }),
            "calculatenetworkfee" => json!({"networkfee": "1230610"}),
            "invokefunction" => json!({
                "state": "HALT",
                "gasconsumed": "0",
                "stack": [{"type": "Integer", "value": self.balance}]
            }),
            "sendrawtransaction" => {
                let raw = request.params[0].as_str().unwrap_or_default();
                let bytes = general_purpose::STANDARD.decode(raw).unwrap_or_default();
                let tx = Transaction::from_array(&bytes).unwrap();
                json!({"hash": tx.hash().unwrap().to_string()})
            }
            _ => Value::Null,
        }
    }
}

#[async_trait]
impl Transport for Node {
    async fn send(&self, request: &RpcRequest) -> Result<RpcResponse, RpcError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(RpcResponse::success(request.id, self.answer(request)))
    }
}

fn client(balance: &'static str) -> Arc<RpcClient<Node>> {
    let config = ClientConfig::for_network(NetworkType::Private).with_network_magic(MAGIC);
    Arc::new(RpcClient::new(Node::new(balance), config))
}

fn key(seed: u8) -> KeyPair {
    KeyPair::from_private_key(&[seed; 32]).unwrap()
}

fn transfer_script() -> Vec<u8> {
    let gas = UInt160::parse("0xd2a4cba551fd2c1bd2d4bc26e5ad1d6d1f1a0b04").unwrap();
    let from = Account::from_key_pair(key(1)).script_hash();
    let mut builder = ScriptBuilder::new();
    builder
        .contract_call(
            gas,
            "transfer",
            &[
                ContractParameter::Hash160(from),
                ContractParameter::Hash160(UInt160::from_array([9u8; 20])),
                ContractParameter::integer(100_000_000),
                ContractParameter::Any,
            ],
            CallFlags::ALL,
        )
        .unwrap();
    builder.into_bytes()
}

#[tokio::test]
async fn test_single_sig_transfer() {
    let client = client("5000000000");
    let account = Account::from_key_pair(key(1));
    let mut signer = TransactionSigner::called_by_entry(account.clone());
    signer
        .add_rules(vec![WitnessRule::new(
            WitnessRuleAction::Allow,
            WitnessCondition::CalledByEntry,
        )])
        .unwrap();

    let mut manager = TransactionBuilder::new(Arc::clone(&client))
        .script(transfer_script())
        .signers(vec![signer])
        .unwrap()
        .throw_if_sender_cannot_cover_fees(|| "insufficient GAS".into())
        .unwrap()
        .sign()
        .await
        .unwrap();

    let tx = manager.transaction().clone();
    assert_eq!(tx.valid_until_block(), 2000 + 5760 - 1);
    assert_eq!(tx.system_fee(), 999_972);
    assert_eq!(tx.network_fee(), 1_230_610);
    assert_eq!(tx.sender(), Some(account.script_hash()));
    assert!(tx.signers()[0].scopes().has_flag(WitnessScope::WITNESS_RULES));

    let sign_data = tx.get_sign_data(MAGIC).unwrap();
    let signature = tx.witnesses()[0].invocation_script.signatures().unwrap()[0];
    assert!(ECDsa::verify(&sign_data, &signature, key(1).public_key()));

    let sent = manager.send().await.unwrap();
    assert_eq!(sent.hash, tx.hash().unwrap());
    assert_eq!(manager.block_count_when_sent(), Some(2000));

    assert_eq!(
        client.transport().methods(),
        [
            "getblockcount",
            "invokescript",
            "calculatenetworkfee",
            "invokefunction",
            "sendrawtransaction",
            "getblockcount"
        ]
    );

    let bytes = tx.to_array().unwrap();
    assert_eq!(Transaction::from_array(&bytes).unwrap(), tx);
}

#[tokio::test]
async fn test_insufficient_balance_never_reaches_the_node() {
    let client = client("10");
    let result = TransactionBuilder::new(Arc::clone(&client))
        .script(transfer_script())
        .signers(vec![TransactionSigner::called_by_entry(Account::from_key_pair(key(1)))])
        .unwrap()
        .throw_if_sender_cannot_cover_fees(|| "insufficient GAS".into())
        .unwrap()
        .send()
        .await;

    assert!(matches!(result, Err(Error::FeeCoverage(_))));
    assert!(!client.transport().methods().contains(&"sendrawtransaction".to_string()));
}

#[tokio::test]
async fn test_multi_sig_round_trip() {
    let client = client("5000000000");
    let keys: Vec<ECPoint> = (1..=3).map(|seed| key(seed).public_key().clone()).collect();
    let script = VerificationScript::from_public_keys(&keys, 2).unwrap();
    let multi_sig = Account::from_verification_script(script.clone()).unwrap();

    let builder = TransactionBuilder::new(Arc::clone(&client))
        .script(transfer_script())
        .signers(vec![TransactionSigner::called_by_entry(multi_sig)])
        .unwrap();
    assert!(matches!(builder.sign().await, Err(Error::Core(CoreError::Unsupported(_)))));

    let mut manager = builder.get_unsigned_transaction().await.unwrap();
    let sign_data = manager.sign_data().unwrap();
    let signatures: BTreeMap<ECPoint, [u8; 64]> = [2u8, 3]
        .iter()
        .map(|seed| {
            let pair = key(*seed);
            (pair.public_key().clone(), pair.sign(&sign_data).unwrap())
        })
        .collect();
    manager.add_multi_sig_witness(script, &signatures).unwrap();

    let witness = &manager.transaction().witnesses()[0];
    let pushed = witness.invocation_script.signatures().unwrap();
    let ordered: Vec<[u8; 64]> = signatures.values().copied().collect();
    assert_eq!(pushed, ordered);
    assert_eq!(witness.script_hash(), manager.transaction().signers()[0].account());

    manager.send().await.unwrap();
}

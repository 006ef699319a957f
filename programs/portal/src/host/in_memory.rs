use std::{collections::HashMap, fmt, rc::Rc};

use alloy_primitives::{Address, Log, LogData, B256, U256};

use super::{CallRequest, Checkpoint, Host, OutOfGas, Storage};

/// Code of a contract deployed on an [`InMemoryHost`]. Returns whether the
/// call succeeded.
pub type Code = Rc<dyn Fn(&mut InMemoryHost, &CallRequest) -> bool>;

/// A sub-call made by the portal, as observed by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallRecord {
    pub request: CallRequest,
    /// Gas actually handed to the target after the 63/64 rule.
    pub gas_forwarded: u64,
    pub success: bool,
}

enum JournalEntry {
    Storage { slot: B256, previous: Option<B256> },
    Balance { account: Address, previous: U256 },
    Log,
    Call,
}

/// Single-account EVM environment kept in memory.
///
/// Storage, balances, logs and call records are journaled. Accounts without deployed code
/// accept every call.
pub struct InMemoryHost {
    address: Address,
    caller: Address,
    origin: Address,
    call_value: U256,
    block_number: u64,
    timestamp: u64,
    base_fee: U256,
    gas_left: u64,

    storage: HashMap<B256, B256>,
    balances: HashMap<Address, U256>,
    code: HashMap<Address, Code>,
    logs: Vec<Log>,
    calls: Vec<CallRecord>,

    journal: Vec<JournalEntry>,
    depth: usize,
}

impl InMemoryHost {
    pub const DEFAULT_GAS_LEFT: u64 = 30_000_000;

    pub fn new(address: Address) -> Self {
        Self {
            address,
            caller: Address::ZERO,
            origin: Address::ZERO,
            call_value: U256::ZERO,
            block_number: 1,
            timestamp: 1,
            base_fee: U256::from(1_000_000_000u64),
            gas_left: Self::DEFAULT_GAS_LEFT,
            storage: HashMap::new(),
            balances: HashMap::new(),
            code: HashMap::new(),
            logs: Vec::new(),
            calls: Vec::new(),
            journal: Vec::new(),
            depth: 0,
        }
    }

    /// Sets the transaction sender, both as caller and origin.
    pub fn set_sender(&mut self, sender: Address) {
        self.caller = sender;
        self.origin = sender;
    }

    /// Runs `f` as if the current caller were the contract `caller`.
    pub fn with_caller<T>(&mut self, caller: Address, f: impl FnOnce(&mut Self) -> T) -> T {
        let previous = std::mem::replace(&mut self.caller, caller);
        let output = f(self);
        self.caller = previous;
        output
    }

    pub fn set_call_value(&mut self, value: U256) {
        self.call_value = value;
    }

    pub fn set_block_number(&mut self, block_number: u64) {
        self.block_number = block_number;
    }

    pub fn advance_blocks(&mut self, count: u64) {
        self.block_number += count;
    }

    pub fn set_timestamp(&mut self, timestamp: u64) {
        self.timestamp = timestamp;
    }

    pub fn warp(&mut self, seconds: u64) {
        self.timestamp += seconds;
    }

    pub fn set_base_fee(&mut self, base_fee: U256) {
        self.base_fee = base_fee;
    }

    pub fn set_gas_left(&mut self, gas_left: u64) {
        self.gas_left = gas_left;
    }

    pub fn deploy(
        &mut self,
        account: Address,
        code: impl Fn(&mut InMemoryHost, &CallRequest) -> bool + 'static,
    ) {
        self.code.insert(account, Rc::new(code));
    }

    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    pub fn set_balance(&mut self, account: Address, balance: U256) {
        let previous = self.balances.insert(account, balance).unwrap_or_default();
        if self.depth > 0 {
            self.journal.push(JournalEntry::Balance { account, previous });
        }
    }

    pub fn logs(&self) -> &[Log] {
        &self.logs
    }

    pub fn calls(&self) -> &[CallRecord] {
        &self.calls
    }

    fn transfer(&mut self, from: Address, to: Address, value: U256) -> bool {
        if value.is_zero() {
            return true;
        }

        let from_balance = self.balance_of(from);
        if from_balance < value {
            return false;
        }

        self.set_balance(from, from_balance - value);
        let to_balance = self.balance_of(to);
        self.set_balance(to, to_balance.saturating_add(value));
        true
    }
}

impl fmt::Debug for InMemoryHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InMemoryHost")
            .field("address", &self.address)
            .field("block_number", &self.block_number)
            .field("timestamp", &self.timestamp)
            .field("gas_left", &self.gas_left)
            .field("storage", &self.storage)
            .field("logs", &self.logs.len())
            .finish_non_exhaustive()
    }
}

impl Storage for InMemoryHost {
    fn sload(&self, slot: B256) -> B256 {
        self.storage.get(&slot).copied().unwrap_or_default()
    }

    fn sstore(&mut self, slot: B256, value: B256) {
        let previous = self.storage.insert(slot, value);
        if self.depth > 0 {
            self.journal.push(JournalEntry::Storage { slot, previous });
        }
    }

    fn checkpoint(&mut self) -> Checkpoint {
        self.depth += 1;
        Checkpoint::new(self.journal.len())
    }

    fn revert(&mut self, checkpoint: Checkpoint) {
        while self.journal.len() > checkpoint.index() {
            match self.journal.pop() {
                Some(JournalEntry::Storage { slot, previous }) => match previous {
                    Some(value) => {
                        self.storage.insert(slot, value);
                    }
                    None => {
                        self.storage.remove(&slot);
                    }
                },
                Some(JournalEntry::Balance { account, previous }) => {
                    self.balances.insert(account, previous);
                }
                Some(JournalEntry::Log) => {
                    self.logs.pop();
                }
                Some(JournalEntry::Call) => {
                    self.calls.pop();
                }
                None => break,
            }
        }
        self.depth = self.depth.saturating_sub(1);
    }

    fn commit(&mut self, _checkpoint: Checkpoint) {
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 0 {
            self.journal.clear();
        }
    }
}

impl Host for InMemoryHost {
    fn address(&self) -> Address {
        self.address
    }

    fn caller(&self) -> Address {
        self.caller
    }

    fn origin(&self) -> Address {
        self.origin
    }

    fn call_value(&self) -> U256 {
        self.call_value
    }

    fn block_number(&self) -> u64 {
        self.block_number
    }

    fn timestamp(&self) -> u64 {
        self.timestamp
    }

    fn base_fee(&self) -> U256 {
        self.base_fee
    }

    fn gas_left(&self) -> u64 {
        self.gas_left
    }

    fn burn_gas(&mut self, amount: u64) -> Result<(), OutOfGas> {
        match self.gas_left.checked_sub(amount) {
            Some(gas_left) => {
                self.gas_left = gas_left;
                Ok(())
            }
            None => {
                self.gas_left = 0;
                Err(OutOfGas)
            }
        }
    }

    fn emit(&mut self, data: LogData) {
        self.logs.push(Log {
            address: self.address,
            data,
        });
        if self.depth > 0 {
            self.journal.push(JournalEntry::Log);
        }
    }

    fn call(&mut self, request: CallRequest) -> bool {
        let checkpoint = self.checkpoint();

        // EIP-150: at most 63/64 of the remaining gas can be forwarded
        let gas_forwarded = request.gas_limit.min(self.gas_left - self.gas_left / 64);
        let gas_retained = self.gas_left - gas_forwarded;

        let success = if self.transfer(self.address, request.target, request.value) {
            let code = self.code.get(&request.target).cloned();

            let caller = std::mem::replace(&mut self.caller, self.address);
            let call_value = std::mem::replace(&mut self.call_value, request.value);
            self.gas_left = gas_forwarded;

            let success = code.map_or(true, |code| code(self, &request));

            self.caller = caller;
            self.call_value = call_value;
            self.gas_left = gas_retained + self.gas_left;
            success
        } else {
            false
        };

        if success {
            self.commit(checkpoint);
        } else {
            self.revert(checkpoint);
        }

        self.calls.push(CallRecord {
            request,
            gas_forwarded,
            success,
        });
        if self.depth > 0 {
            self.journal.push(JournalEntry::Call);
        }

        success
    }
}

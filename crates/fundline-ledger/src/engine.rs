use fundline_store::StateStore;
use fundline_types::{
    codec, token, Donation, DonationId, Person, Record, Request, RequestId, RequestIndex,
};
use tracing::{debug, warn};

use crate::error::LedgerError;
use crate::keyspace;

/// Payload returned by [`LedgerEngine::read`] for a missing key.
///
/// Read is deliberately lenient: callers receive this fixed sentinel
/// instead of an error and must distinguish it themselves.
pub const MISSING_VALUE_PLACEHOLDER: &[u8] = b"cannot find the key's value";

/// How many fresh tokens to try before giving up on id generation.
const FRESH_ID_ATTEMPTS: usize = 16;

/// The ledger engine: all state transitions over a keyed store.
///
/// The engine owns only the store handle. It holds no record state across
/// operations; every operation re-reads the records it needs and writes
/// fresh snapshots back. Concurrent invocations are not serialized here —
/// the hosting platform is expected to wrap each invocation atomically
/// across the multi-key write set.
pub struct LedgerEngine<S: StateStore> {
    store: S,
    token_len: usize,
}

impl<S: StateStore> LedgerEngine<S> {
    /// Create an engine over `store` with the default id token length.
    pub fn new(store: S) -> Self {
        Self::with_token_len(store, token::DEFAULT_TOKEN_LEN)
    }

    /// Create an engine generating ids of `token_len` alphanumeric chars.
    pub fn with_token_len(store: S, token_len: usize) -> Self {
        Self { store, token_len }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Seed the ledger: one person record per identity, plus the empty
    /// request index.
    ///
    /// Idempotent per identity — an existing person is left untouched, so
    /// repeated seeding never resets accumulated request or donation
    /// sequences. Each write is independent; a failure mid-way leaves the
    /// records already written intact.
    pub fn init(&self, seed_identities: &[String]) -> Result<(), LedgerError> {
        for identity in seed_identities {
            let key = keyspace::person_key(identity);
            if self.store.get(&key)?.is_none() {
                self.put_record(&key, &Person::new(identity.clone()))?;
                debug!(person = %identity, "seeded person");
            }
        }

        if self.store.get(keyspace::INDEX_KEY)?.is_none() {
            self.put_record(keyspace::INDEX_KEY, &RequestIndex::empty())?;
            debug!("created empty request index");
        }
        Ok(())
    }

    /// Create a funding request and return its generated id.
    ///
    /// Writes the request, appends its id to the author's `myRequests`
    /// (creating the person if absent), and appends a snapshot of the
    /// request to the index. A missing or undecodable index is a hard
    /// failure — the ledger must have been initialized.
    pub fn create_request(
        &self,
        who: &str,
        name: &str,
        description: &str,
        expected_money: i64,
    ) -> Result<RequestId, LedgerError> {
        if expected_money < 0 {
            return Err(LedgerError::invalid(format!(
                "expectedMoney must be non-negative, got {expected_money}"
            )));
        }

        // Fail before any write if the ledger was never initialized.
        let mut index = self.read_index()?;

        let rid = self.fresh_id(keyspace::REQUEST_PREFIX, keyspace::request_key)?;
        let request = Request::new(rid.clone(), who, name, description, expected_money);
        self.put_record(&keyspace::request_key(&rid), &request)?;

        self.append_to_person(who, |person| person.my_requests.push(rid.clone()))?;

        index.push(request);
        self.put_record(keyspace::INDEX_KEY, &index)?;

        debug!(request = %rid, author = %who, expected = expected_money, "created request");
        Ok(rid)
    }

    /// Donate `money` to the request `rid` on behalf of `from`, returning
    /// the generated donation id.
    ///
    /// The target request is resolved first: donating to a request that
    /// does not exist fails with `NotFound` before anything is written, so
    /// no orphan donation records are left behind. The donor person is
    /// created if absent, same as for request authors. The index mirror of
    /// the request receives the identical increment and append; a request
    /// somehow missing from the index is logged and tolerated, not
    /// repaired.
    pub fn create_donation(
        &self,
        from: &str,
        rid: &str,
        money: i64,
    ) -> Result<DonationId, LedgerError> {
        if money <= 0 {
            return Err(LedgerError::invalid(format!(
                "money must be positive, got {money}"
            )));
        }

        let request_key = keyspace::request_key(rid);
        let mut request: Request = self
            .read_record(&request_key)?
            .ok_or(LedgerError::NotFound { key: request_key })?;

        // Still before any write: a total that cannot absorb the donation
        // must not leave an orphan donation record behind.
        if request.current_money.checked_add(money).is_none() {
            return Err(LedgerError::invalid(format!(
                "donation of {money} would overflow the running total {} of request {rid}",
                request.current_money
            )));
        }

        let mut index = self.read_index()?;

        let did = self.fresh_id(keyspace::DONATION_PREFIX, keyspace::donation_key)?;
        let donation = Donation::new(did.clone(), from, rid, money);
        self.put_record(&keyspace::donation_key(&did), &donation)?;

        self.append_to_person(from, |person| person.my_donations.push(did.clone()))?;

        request.apply_donation(&did, money);
        self.put_record(&keyspace::request_key(rid), &request)?;

        match index.find_mut(rid) {
            Some(entry) => {
                if !entry.apply_donation(&did, money) {
                    warn!(request = %rid, "index mirror total would overflow; mirror not updated");
                }
            }
            None => warn!(request = %rid, "request absent from index; mirror not updated"),
        }
        self.put_record(keyspace::INDEX_KEY, &index)?;

        debug!(donation = %did, donor = %from, request = %rid, money, "created donation");
        Ok(did)
    }

    /// Raw passthrough read of a store key.
    ///
    /// A missing key yields [`MISSING_VALUE_PLACEHOLDER`], not an error;
    /// errors are reserved for store failures.
    pub fn read(&self, key: &str) -> Result<Vec<u8>, LedgerError> {
        match self.store.get(key)? {
            Some(value) => Ok(value),
            None => Ok(MISSING_VALUE_PLACEHOLDER.to_vec()),
        }
    }

    // ---- record plumbing ----

    fn read_record<R: Record>(&self, key: &str) -> Result<Option<R>, LedgerError> {
        match self.store.get(key)? {
            Some(bytes) => Ok(Some(codec::decode(&bytes)?)),
            None => Ok(None),
        }
    }

    fn put_record<R: Record>(&self, key: &str, record: &R) -> Result<(), LedgerError> {
        let bytes = codec::encode(record)?;
        self.store.put(key, &bytes)?;
        Ok(())
    }

    fn read_index(&self) -> Result<RequestIndex, LedgerError> {
        self.read_record(keyspace::INDEX_KEY)?
            .ok_or_else(|| LedgerError::IndexUnavailable {
                reason: "index record missing; ledger not initialized".into(),
            })
    }

    /// Missing person is not an error: it triggers creation. Requests are
    /// strict about absence, people are lenient.
    fn append_to_person(
        &self,
        id: &str,
        append: impl FnOnce(&mut Person),
    ) -> Result<(), LedgerError> {
        let key = keyspace::person_key(id);
        let mut person = match self.read_record::<Person>(&key)? {
            Some(person) => person,
            None => {
                debug!(person = %id, "creating person on first write");
                Person::new(id)
            }
        };
        append(&mut person);
        self.put_record(&key, &person)
    }

    /// Generate an id token that is not yet present under the keyspace
    /// entry `make_key` produces. Bounded retries; the token alphabet is
    /// small enough that a saturated keyspace must fail loudly rather than
    /// loop.
    fn fresh_id(
        &self,
        prefix: &str,
        make_key: impl Fn(&str) -> String,
    ) -> Result<String, LedgerError> {
        for _ in 0..FRESH_ID_ATTEMPTS {
            let candidate = token::alnum_token(self.token_len);
            if self.store.get(&make_key(&candidate))?.is_none() {
                return Ok(candidate);
            }
        }
        Err(LedgerError::IdSpaceExhausted {
            prefix: prefix.to_string(),
            attempts: FRESH_ID_ATTEMPTS,
        })
    }
}

impl<S: StateStore> std::fmt::Debug for LedgerEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerEngine")
            .field("token_len", &self.token_len)
            .finish()
    }
}

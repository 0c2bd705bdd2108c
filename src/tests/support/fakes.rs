//! In-memory port implementations for service tests. Each fake keeps its
//! state behind an `Arc<Mutex<_>>`, so a clone handed to a service still
//! shares rows with the copy the test inspects.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::auth::application::domain::entities::{
    FederatedIdentity, OAuthProvider, Role, User, UserId,
};
use crate::auth::application::domain::password_reset::reset_token_digest;
use crate::auth::application::ports::outgoing::{
    CreateUserData, HashError, PasswordHasher, TokenProvider, UserQuery, UserQueryError,
    UserRepository, UserRepositoryError,
};
use crate::order::application::domain::{
    ContactNumber, NewOrder, OrderCode, OrderStatus, OrderView, PlacedOrder,
};
use crate::order::application::ports::outgoing::{
    OrderCodeGenerator, OrderQuery, OrderQueryError, OrderRepository, OrderRepositoryError,
};
use crate::player::application::domain::PlayerUid;
use crate::tests::support::auth_helper::create_test_jwt_service;

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(create_test_jwt_service())
}

// ========================= Passwords =========================
/// Stores `hashed:<password>` so tests can read what was hashed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FakeHasher;

#[async_trait]
impl PasswordHasher for FakeHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        Ok(format!("hashed:{}", password))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        Ok(hash == format!("hashed:{}", password))
    }
}

// ========================= Users =========================
#[derive(Default)]
struct UserRows {
    users: Vec<User>,
    reset_tokens: HashMap<UserId, (String, DateTime<Utc>)>,
}

#[derive(Clone, Default)]
pub struct InMemoryUsers {
    rows: Arc<Mutex<UserRows>>,
    failing: bool,
}

impl InMemoryUsers {
    /// Every port call fails with a database error.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    fn rows(&self) -> MutexGuard<'_, UserRows> {
        self.rows.lock().unwrap()
    }

    fn push(&self, user: User) -> User {
        self.rows().users.push(user.clone());
        user
    }

    pub fn insert_local(&self, email: &str, password: &str, balance: i64) -> User {
        self.push(User {
            id: UserId::new(),
            name: "Test User".to_string(),
            email: email.to_lowercase(),
            password_hash: Some(format!("hashed:{}", password)),
            wallet_balance: balance,
            role: Role::User,
            identity: None,
            profile_pic: None,
            created_at: Utc::now(),
        })
    }

    pub fn insert_social(&self, email: &str, provider: &str, provider_id: &str) -> User {
        self.push(User {
            id: UserId::new(),
            name: "Social User".to_string(),
            email: email.to_lowercase(),
            password_hash: None,
            wallet_balance: 0,
            role: Role::User,
            identity: Some(FederatedIdentity {
                provider: provider.parse().unwrap(),
                provider_id: provider_id.to_string(),
            }),
            profile_pic: None,
            created_at: Utc::now(),
        })
    }

    pub fn by_email(&self, email: &str) -> Option<User> {
        self.rows()
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    pub fn count(&self) -> usize {
        self.rows().users.len()
    }

    /// Stores the digest of `raw`, as the real repository would.
    pub fn set_reset_token(&self, email: &str, raw: &str, expires_at: DateTime<Utc>) {
        let user = self.by_email(email).unwrap();
        self.rows()
            .reset_tokens
            .insert(user.id, (reset_token_digest(raw), expires_at));
    }

    pub fn reset_token_of(&self, email: &str) -> Option<(String, DateTime<Utc>)> {
        let user = self.by_email(email)?;
        self.rows().reset_tokens.get(&user.id).cloned()
    }

    fn query_guard(&self) -> Result<(), UserQueryError> {
        if self.failing {
            return Err(UserQueryError::DatabaseError("storage offline".into()));
        }
        Ok(())
    }

    fn repo_guard(&self) -> Result<(), UserRepositoryError> {
        if self.failing {
            return Err(UserRepositoryError::DatabaseError("storage offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserQuery for InMemoryUsers {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        self.query_guard()?;
        Ok(self.rows().users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        self.query_guard()?;
        Ok(self.by_email(email))
    }

    async fn find_by_identity(
        &self,
        provider: OAuthProvider,
        provider_id: &str,
    ) -> Result<Option<User>, UserQueryError> {
        self.query_guard()?;
        Ok(self
            .rows()
            .users
            .iter()
            .find(|u| {
                u.identity
                    .as_ref()
                    .is_some_and(|i| i.provider == provider && i.provider_id == provider_id)
            })
            .cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        self.repo_guard()?;
        let mut rows = self.rows();

        let clash = rows.users.iter().any(|u| {
            u.email.eq_ignore_ascii_case(&data.email)
                || (data.identity.is_some() && u.identity == data.identity)
        });
        if clash {
            return Err(UserRepositoryError::UserAlreadyExists);
        }

        let user = User {
            id: UserId::new(),
            name: data.name,
            email: data.email.to_lowercase(),
            password_hash: data.password_hash,
            wallet_balance: 0,
            role: Role::User,
            identity: data.identity,
            profile_pic: data.profile_pic,
            created_at: Utc::now(),
        };
        rows.users.push(user.clone());
        Ok(user)
    }

    async fn link_identity(
        &self,
        user_id: UserId,
        identity: FederatedIdentity,
        profile_pic: Option<String>,
    ) -> Result<User, UserRepositoryError> {
        self.repo_guard()?;
        let mut rows = self.rows();
        let user = rows
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or(UserRepositoryError::UserNotFound)?;

        user.identity = Some(identity);
        if profile_pic.is_some() {
            user.profile_pic = profile_pic;
        }
        Ok(user.clone())
    }

    async fn store_reset_token(
        &self,
        user_id: UserId,
        token_digest: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        self.repo_guard()?;
        let mut rows = self.rows();
        if !rows.users.iter().any(|u| u.id == user_id) {
            return Err(UserRepositoryError::UserNotFound);
        }
        rows.reset_tokens.insert(user_id, (token_digest, expires_at));
        Ok(())
    }

    async fn revoke_reset_token(
        &self,
        user_id: UserId,
        token_digest: &str,
    ) -> Result<(), UserRepositoryError> {
        self.repo_guard()?;
        let mut rows = self.rows();
        if rows
            .reset_tokens
            .get(&user_id)
            .is_some_and(|(digest, _)| digest == token_digest)
        {
            rows.reset_tokens.remove(&user_id);
        }
        Ok(())
    }

    async fn reset_password_with_token(
        &self,
        token_digest: &str,
        new_password_hash: String,
        now: DateTime<Utc>,
    ) -> Result<bool, UserRepositoryError> {
        self.repo_guard()?;
        let mut rows = self.rows();

        let owner = rows
            .reset_tokens
            .iter()
            .find(|(_, (digest, expires_at))| digest == token_digest && *expires_at > now)
            .map(|(id, _)| *id);
        let Some(owner) = owner else {
            return Ok(false);
        };

        rows.reset_tokens.remove(&owner);
        if let Some(user) = rows.users.iter_mut().find(|u| u.id == owner) {
            user.password_hash = Some(new_password_hash);
        }
        Ok(true)
    }
}

// ========================= Orders =========================
struct OrderRows {
    packages: HashMap<i32, String>,
    balances: HashMap<UserId, i64>,
    orders: Vec<OrderView>,
    next_id: i32,
    epoch: DateTime<Utc>,
}

impl Default for OrderRows {
    fn default() -> Self {
        Self {
            packages: HashMap::new(),
            balances: HashMap::new(),
            orders: Vec::new(),
            next_id: 1,
            epoch: Utc::now(),
        }
    }
}

impl OrderRows {
    fn code_taken(&self, code: &OrderCode) -> bool {
        self.orders
            .iter()
            .any(|o| o.order_code.as_deref() == Some(code.as_str()))
    }

    fn insert(&mut self, order: NewOrder) -> PlacedOrder {
        let id = self.next_id;
        self.next_id += 1;

        let package_name = self
            .packages
            .get(&order.package_id)
            .cloned()
            .unwrap_or_else(|| format!("Package {}", order.package_id));

        self.orders.push(OrderView {
            id,
            order_code: Some(order.order_code.as_str().to_string()),
            user_id: order.user_id.map(|u| u.value()),
            user_name: None,
            package_id: order.package_id,
            package_name,
            player_uid: order.player_uid.as_str().to_string(),
            status: OrderStatus::Pending,
            payment_method: order.payment_method.as_str().to_string(),
            transaction_id: order.transaction_id,
            contact_number: order.contact_number.map(ContactNumber::into_inner),
            price: order.price,
            created_at: order.created_at,
            completed_at: None,
        });

        PlacedOrder {
            id,
            order_code: order.order_code,
            payment_method: order.payment_method,
            price: order.price,
        }
    }

    /// Newest first, ties broken by id.
    fn sorted(&self, keep: impl Fn(&OrderView) -> bool) -> Vec<OrderView> {
        let mut out: Vec<_> = self.orders.iter().filter(|o| keep(o)).cloned().collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        out
    }
}

/// Orders plus the wallet balances a wallet payment debits.
#[derive(Clone, Default)]
pub struct InMemoryOrders {
    rows: Arc<Mutex<OrderRows>>,
    failing: bool,
}

impl InMemoryOrders {
    pub fn with_package(id: i32, name: &str) -> Self {
        let orders = Self::default();
        orders.rows().packages.insert(id, name.to_string());
        orders
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    fn rows(&self) -> MutexGuard<'_, OrderRows> {
        self.rows.lock().unwrap()
    }

    pub fn set_balance(&self, user_id: UserId, balance: i64) {
        self.rows().balances.insert(user_id, balance);
    }

    pub fn balance_of(&self, user_id: UserId) -> Option<i64> {
        self.rows().balances.get(&user_id).copied()
    }

    pub fn all(&self) -> Vec<OrderView> {
        self.rows().sorted(|_| true)
    }

    pub fn find(&self, id: i32) -> Option<OrderView> {
        self.rows().orders.iter().find(|o| o.id == id).cloned()
    }

    /// Pending bkash order for package 1; each call is one second newer
    /// than the previous.
    pub fn seed_order(&self, code: &str, owner: Option<UserId>, contact: Option<&str>) -> i32 {
        let mut rows = self.rows();
        let created_at = rows.epoch + Duration::seconds(i64::from(rows.next_id));
        let order = NewOrder {
            user_id: owner,
            package_id: 1,
            player_uid: PlayerUid::parse("123456789").unwrap(),
            payment_method: "bkash".parse().unwrap(),
            transaction_id: Some("TXSEED".to_string()),
            contact_number: contact.map(|c| ContactNumber::parse(c).unwrap()),
            order_code: OrderCode::from_stored(code.to_string()),
            price: 100,
            created_at,
        };
        rows.insert(order).id
    }

    fn query_guard(&self) -> Result<(), OrderQueryError> {
        if self.failing {
            return Err(OrderQueryError::DatabaseError("storage offline".into()));
        }
        Ok(())
    }

    fn repo_guard(&self) -> Result<(), OrderRepositoryError> {
        if self.failing {
            return Err(OrderRepositoryError::DatabaseError("storage offline".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl OrderQuery for InMemoryOrders {
    async fn find_status(&self, order_id: i32) -> Result<Option<OrderStatus>, OrderQueryError> {
        self.query_guard()?;
        Ok(self.find(order_id).map(|o| o.status))
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<OrderView>, OrderQueryError> {
        self.query_guard()?;
        Ok(self.rows().sorted(|o| o.user_id == Some(user_id.value())))
    }

    async fn track(
        &self,
        order_code: &str,
        contact_number: Option<&ContactNumber>,
    ) -> Result<Vec<OrderView>, OrderQueryError> {
        self.query_guard()?;
        Ok(self.rows().sorted(|o| {
            o.order_code.as_deref() == Some(order_code)
                || contact_number
                    .is_some_and(|c| o.contact_number.as_deref() == Some(c.as_str()))
        }))
    }

    async fn list_by_codes(&self, codes: &[String]) -> Result<Vec<OrderView>, OrderQueryError> {
        self.query_guard()?;
        Ok(self
            .rows()
            .sorted(|o| o.order_code.as_ref().is_some_and(|c| codes.contains(c))))
    }

    async fn list_all(&self) -> Result<Vec<OrderView>, OrderQueryError> {
        self.query_guard()?;
        Ok(self.all())
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn place_wallet_order(
        &self,
        payer: UserId,
        order: NewOrder,
    ) -> Result<PlacedOrder, OrderRepositoryError> {
        self.repo_guard()?;
        let mut rows = self.rows();

        // A clash must not leave a debit behind
        if rows.code_taken(&order.order_code) {
            return Err(OrderRepositoryError::DuplicateOrderCode);
        }

        let balance = rows
            .balances
            .get_mut(&payer)
            .ok_or(OrderRepositoryError::UserNotFound)?;
        if *balance < order.price {
            return Err(OrderRepositoryError::InsufficientBalance);
        }
        *balance -= order.price;

        Ok(rows.insert(order))
    }

    async fn place_manual_order(&self, order: NewOrder) -> Result<PlacedOrder, OrderRepositoryError> {
        self.repo_guard()?;
        let mut rows = self.rows();

        if rows.code_taken(&order.order_code) {
            return Err(OrderRepositoryError::DuplicateOrderCode);
        }

        Ok(rows.insert(order))
    }

    async fn update_status_if(
        &self,
        order_id: i32,
        expected: OrderStatus,
        next: OrderStatus,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<bool, OrderRepositoryError> {
        self.repo_guard()?;
        let mut rows = self.rows();

        let Some(order) = rows
            .orders
            .iter_mut()
            .find(|o| o.id == order_id && o.status == expected)
        else {
            return Ok(false);
        };

        order.status = next;
        if completed_at.is_some() {
            order.completed_at = completed_at;
        }
        Ok(true)
    }
}

// ========================= Order codes =========================
/// Hands out the given codes in order, then keeps repeating the last one.
pub struct SequenceCodes {
    codes: Vec<String>,
    cursor: Mutex<usize>,
}

impl SequenceCodes {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: codes.iter().map(|c| c.to_string()).collect(),
            cursor: Mutex::new(0),
        }
    }
}

impl OrderCodeGenerator for SequenceCodes {
    fn next_code(&self) -> OrderCode {
        let mut cursor = self.cursor.lock().unwrap();
        let idx = (*cursor).min(self.codes.len().saturating_sub(1));
        *cursor += 1;
        OrderCode::from_stored(self.codes[idx].clone())
    }
}

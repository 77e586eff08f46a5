use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::blackout::BlackoutRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::ledger::LedgerRepositoryImpl;
use adapter::repository::reservation::BookingRepositoryImpl;
use adapter::repository::unit::UnitRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::repository::auth::AuthRepository;
use kernel::repository::blackout::BlackoutRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::ledger::LedgerRepository;
use kernel::repository::reservation::BookingRepository;
use kernel::repository::unit::UnitRepository;
use kernel::repository::user::UserRepository;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    unit_repository: Arc<dyn UnitRepository>,
    blackout_repository: Arc<dyn BlackoutRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    ledger_repository: Arc<dyn LedgerRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let unit_repository = Arc::new(UnitRepositoryImpl::new(pool.clone()));
        let blackout_repository = Arc::new(BlackoutRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        let ledger_repository = Arc::new(LedgerRepositoryImpl::new(pool));
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            unit_repository,
            blackout_repository,
            booking_repository,
            ledger_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn unit_repository(&self) -> Arc<dyn UnitRepository> {
        self.unit_repository.clone()
    }

    pub fn blackout_repository(&self) -> Arc<dyn BlackoutRepository> {
        self.blackout_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn ledger_repository(&self) -> Arc<dyn LedgerRepository> {
        self.ledger_repository.clone()
    }
}

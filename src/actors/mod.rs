mod customer_actor;

pub use customer_actor::CustomerActor;

use shop_recipe::cart::Cart;
use shop_recipe::lifecycle::{ShopConfig, ShopSystem};
use shop_recipe::model::{OrderStatus, Product, ProductId};
use shop_recipe::order_manager::{OrderError, TransitionPolicy};
use shop_recipe::product_manager::ProductManager;
use shop_recipe::reporting::{mock::RecordingReporter, ShopEvent};
use std::rc::Rc;

fn shop_with(policy: TransitionPolicy) -> (ShopSystem, Rc<RecordingReporter>) {
    let recorder = Rc::new(RecordingReporter::new());
    let config = ShopConfig {
        transition_policy: policy,
    };
    let mut system = ShopSystem::with_reporter(config, recorder.clone());
    system
        .catalog
        .add_product(Product::new(ProductId(1), "Laptop", 75000.0).unwrap())
        .unwrap();
    system.cart.add_item(ProductId(1), 1).unwrap();
    (system, recorder)
}

#[test]
fn test_permissive_policy_accepts_any_change() {
    let (mut system, _recorder) = shop_with(TransitionPolicy::Permissive);
    let id = system.checkout().unwrap();

    // Delivered straight from preparing, then back again
    for status in [OrderStatus::Delivered, OrderStatus::Preparing, OrderStatus::Cancelled] {
        system.orders.update_order_status(id, status).unwrap();
        assert_eq!(system.orders.find_order(id).unwrap().status(), status);
    }
}

#[test]
fn test_lifecycle_policy_walks_the_happy_path() {
    let (mut system, recorder) = shop_with(TransitionPolicy::Lifecycle);
    let id = system.checkout().unwrap();

    system.orders.update_order_status(id, OrderStatus::Shipped).unwrap();
    system.orders.update_order_status(id, OrderStatus::Delivered).unwrap();

    recorder.assert_emitted(&ShopEvent::OrderStatusUpdated {
        order_id: id,
        from: OrderStatus::Shipped,
        to: OrderStatus::Delivered,
    });
    assert!(recorder.rejections().is_empty());
}

#[test]
fn test_lifecycle_policy_rejects_leaving_a_terminal_state() {
    let (mut system, recorder) = shop_with(TransitionPolicy::Lifecycle);
    let id = system.checkout().unwrap();
    system.orders.update_order_status(id, OrderStatus::Cancelled).unwrap();

    let result = system.orders.update_order_status(id, OrderStatus::Shipped);

    assert_eq!(
        result,
        Err(OrderError::IllegalTransition {
            id,
            from: OrderStatus::Cancelled,
            to: OrderStatus::Shipped,
        })
    );
    assert_eq!(
        system.orders.find_order(id).unwrap().status(),
        OrderStatus::Cancelled
    );
    assert_eq!(
        recorder.last(),
        Some(ShopEvent::IllegalTransition {
            order_id: id,
            from: OrderStatus::Cancelled,
            to: OrderStatus::Shipped,
        })
    );
}

#[test]
fn test_status_names_parse_case_insensitively() {
    assert_eq!("shipped".parse::<OrderStatus>(), Ok(OrderStatus::Shipped));
    assert_eq!("DELIVERED".parse::<OrderStatus>(), Ok(OrderStatus::Delivered));
    assert_eq!(
        "lost".parse::<OrderStatus>(),
        Err(OrderError::UnknownStatus("lost".to_string()))
    );
}

#[test]
fn test_carts_from_separate_catalogs_are_independent() {
    let recorder = Rc::new(RecordingReporter::new());
    let first = ProductManager::with_reporter(recorder.clone());
    let second = ProductManager::with_reporter(recorder.clone());
    first
        .add_product(Product::new(ProductId(1), "Laptop", 75000.0).unwrap())
        .unwrap();

    let mut cart = Cart::new(&second);
    assert!(cart.add_item(ProductId(1), 1).is_err());
    recorder.assert_emitted(&ShopEvent::ProductNotFound {
        product_id: ProductId(1),
    });
}

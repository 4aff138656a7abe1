//! End-to-end walkthrough: seed the menu, fill a cart, run two orders
//! through the kitchen, then print the manager's numbers.
//!
//! ```bash
//! cargo run -p pos-engine --example demo
//! ```

use pos_engine::analytics::TimeRange;
use pos_engine::catalog::Catalog;
use pos_engine::config::Config;
use pos_engine::export;
use pos_engine::insights::{self, InsightsClient};
use pos_engine::logger;
use pos_engine::state::AppState;
use shared::models::{Modifier, ModifierAction, ModifierGroup, Product, SelectionRule};
use shared::order::{CartAdd, PlaceOrder};

fn demo_menu() -> Vec<Product> {
    let mut grand_beef = Product::new("p1", "Гранд Биф \"Маэстро\"", "Бургеры", 490);
    grand_beef.old_price = Some(550);
    grand_beef.badges = vec!["HIT".to_string(), "NEW".to_string()];

    vec![
        grand_beef,
        Product::new("p2", "Чизбургер Джуниор", "Бургеры", 190),
        Product::new("p3", "Спайси Чикен Тауэр", "Бургеры", 380),
        Product::new("p4", "Цезарь Ролл XL", "Роллы", 290),
        Product::new("p5", "Картофель Фри", "Снэки", 150),
        Product::new("p6", "Наггетсы (9 шт)", "Снэки", 240),
    ]
}

fn demo_modifier_groups() -> Vec<ModifierGroup> {
    vec![
        ModifierGroup {
            id: "grp-add".to_string(),
            name: "Добавки".to_string(),
            selection: SelectionRule::AnyOf,
            options: vec![
                Modifier {
                    id: "add-cheese".to_string(),
                    name: "Двойной сыр".to_string(),
                    price: 150,
                    action: ModifierAction::Add,
                },
                Modifier {
                    id: "add-bacon".to_string(),
                    name: "Бекон".to_string(),
                    price: 100,
                    action: ModifierAction::Add,
                },
            ],
        },
        ModifierGroup {
            id: "grp-rem".to_string(),
            name: "Убрать".to_string(),
            selection: SelectionRule::AnyOf,
            options: vec![
                Modifier {
                    id: "rem-onion".to_string(),
                    name: "Лук".to_string(),
                    price: 0,
                    action: ModifierAction::Remove,
                },
                Modifier {
                    id: "rem-pickles".to_string(),
                    name: "Огурцы".to_string(),
                    price: 0,
                    action: ModifierAction::Remove,
                },
            ],
        },
    ]
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_logger();
    let config = Config::from_env();
    let catalog = Catalog::new(demo_menu(), demo_modifier_groups())?;
    let state = AppState::new(config, catalog);

    // Дмитрий: no-onion burger twice (merges) plus fries
    state.add_to_cart(CartAdd::product("p1").with_modifiers(vec!["rem-onion".to_string()]))?;
    state.add_to_cart(CartAdd::product("p1").with_modifiers(vec!["rem-onion".to_string()]))?;
    state.add_to_cart(CartAdd::product("p5"))?;
    let first = state.place_order(PlaceOrder::new("Дмитрий").at_table("4"))?;

    // Анна: spicy tower with extras and a comment for the kitchen
    state.add_to_cart(
        CartAdd::product("p3")
            .with_modifiers(vec!["add-cheese".to_string(), "add-bacon".to_string()])
            .with_comment("острее"),
    )?;
    let second = state.place_order(PlaceOrder::new("Анна"))?;

    // kitchen works the queue
    state.advance_order(&first.id)?; // COOKING
    state.advance_order(&first.id)?; // READY
    state.advance_order(&first.id)?; // COMPLETED
    state.advance_order(&second.id)?; // COOKING

    let board = state.kitchen_board();
    tracing::info!(
        tickets = board.tickets.len(),
        pending = board.stats.pending,
        cooking = board.stats.cooking,
        "Kitchen board"
    );
    for item in &board.production {
        tracing::info!(item = %item.name, quantity = item.quantity, "To produce");
    }

    let summary = state.sales_summary(TimeRange::Today);
    tracing::info!(
        revenue = summary.revenue,
        orders = summary.order_count,
        average_ticket = summary.average_ticket,
        progress = summary.target_progress_percent,
        "Sales summary"
    );

    let insights = InsightsClient::new(state.config());
    let analysis = insights
        .generate(&insights::build_business_summary(&summary))
        .await;
    tracing::info!(analysis = %analysis, "Manager insights");

    print!("{}", export::render_csv(&state.order_snapshot(), state.config().timezone));
    Ok(())
}

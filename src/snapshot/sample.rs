//! Demo data set

use chrono::NaiveDate;

use super::Snapshot;
use crate::models::{
    BudgetCategory, BudgetItem, CategoryId, CategoryTrend, Frequency, IncomeId, IncomeSource,
    ItemId, MonthlyDataPoint, Money, SavingsGoal, Transaction, TransactionId, TransactionType,
};

fn item(id: u32, name: &str, euros: i64, is_fixed: bool) -> BudgetItem {
    BudgetItem::new(ItemId::new(id), name, Money::from_major(euros), is_fixed)
}

fn category(id: u32, name: &str, icon: &str, color: &str, items: Vec<BudgetItem>) -> BudgetCategory {
    let mut category = BudgetCategory::new(CategoryId::new(id), name, color, icon);
    category.items = items;
    category
}

fn sample_categories() -> Vec<BudgetCategory> {
    vec![
        category(1, "Wohnen", "🏠", "#ef4444", vec![item(1, "Miete", 500, true)]),
        category(
            2,
            "Auto",
            "🚗",
            "#10b981",
            vec![item(2, "Steuer", 12, true), item(3, "Versicherung", 45, true)],
        ),
        category(
            3,
            "Versicherungen",
            "🛡️",
            "#8b5cf6",
            vec![item(4, "Hausrat", 8, true), item(5, "Gewerbe", 15, true)],
        ),
        category(
            4,
            "Lifestyle",
            "🎨",
            "#f59e0b",
            vec![
                item(6, "IQOS", 40, false),
                item(7, "Kosmetik", 10, false),
                item(8, "Friseur", 15, false),
                item(9, "Ausgehen", 30, false),
            ],
        ),
        category(
            5,
            "Ernährung",
            "🍽️",
            "#06b6d4",
            vec![item(10, "Essen & Trinken", 150, false)],
        ),
        category(
            6,
            "Abos",
            "📱",
            "#ec4899",
            vec![
                item(11, "Adobe", 12, true),
                item(12, "Amazon", 9, true),
                item(13, "Handy", 15, true),
            ],
        ),
        category(
            7,
            "Spenden",
            "❤️",
            "#84cc16",
            vec![item(14, "Save the Children", 15, true)],
        ),
        category(
            8,
            "Rücklagen",
            "💰",
            "#64748b",
            vec![
                item(15, "Sparen", 30, false),
                item(16, "Urlaub", 25, false),
                item(17, "Notfälle", 20, false),
                item(18, "Haushaltskasse", 15, false),
            ],
        ),
    ]
}

fn sample_income() -> Vec<IncomeSource> {
    let mut freelance = IncomeSource::new(
        IncomeId::new(2),
        "Freelance Projekte",
        Money::from_major(200),
        Frequency::Monthly,
    )
    .with_style("💻", "#8b5cf6");
    freelance.is_active = false;

    vec![
        IncomeSource::new(IncomeId::new(1), "Hauptgehalt", Money::from_major(1024), Frequency::Monthly)
            .with_style("💼", "#22c55e"),
        freelance,
        IncomeSource::new(IncomeId::new(3), "Dividenden", Money::from_major(15), Frequency::Monthly)
            .with_style("📈", "#06b6d4"),
    ]
}

fn sample_transactions() -> Vec<Transaction> {
    let rows: [(u32, (i32, u32, u32), i64, &str, &str, &str, TransactionType); 6] = [
        (1, (2026, 2, 19), -4550, "REWE Supermarkt", "Ernährung", "#06b6d4", TransactionType::Expense),
        (2, (2026, 2, 18), -1200, "Kfz-Steuer", "Auto", "#10b981", TransactionType::Expense),
        (3, (2026, 2, 15), 102400, "Gehalt", "Einkommen", "#22c55e", TransactionType::Income),
        (4, (2026, 2, 1), -50000, "Miete Februar", "Wohnen", "#ef4444", TransactionType::Expense),
        (5, (2026, 1, 28), -3580, "Restaurant Besuch", "Lifestyle", "#f59e0b", TransactionType::Expense),
        (6, (2026, 1, 25), -8999, "Tankstelle", "Auto", "#10b981", TransactionType::Expense),
    ];

    rows.into_iter()
        .filter_map(|(id, (y, m, d), cents, description, category, color, kind)| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(
                Transaction::new(
                    TransactionId::new(id),
                    date,
                    Money::from_cents(cents),
                    description,
                    category,
                    kind,
                )
                .with_color(color),
            )
        })
        .collect()
}

fn sample_monthly_data() -> Vec<MonthlyDataPoint> {
    [
        ("Sep 2025", 1024, 980),
        ("Okt 2025", 1024, 1050),
        ("Nov 2025", 1200, 945),
        ("Dez 2025", 1400, 1200),
        ("Jan 2026", 1024, 890),
        ("Feb 2026", 1024, 966),
    ]
    .into_iter()
    .map(|(month, income, expenses)| {
        MonthlyDataPoint::new(month, Money::from_major(income), Money::from_major(expenses))
    })
    .collect()
}

fn sample_trends() -> Vec<CategoryTrend> {
    [
        ("Wohnen", "#ef4444", 500, 500),
        ("Ernährung", "#06b6d4", 150, 180),
        ("Auto", "#10b981", 57, 45),
        ("Lifestyle", "#f59e0b", 95, 120),
        ("Rücklagen", "#8b5cf6", 90, 75),
        ("Sonstiges", "#6b7280", 74, 90),
    ]
    .into_iter()
    .map(|(name, color, current, previous)| CategoryTrend {
        color: color.to_string(),
        ..CategoryTrend::new(name, Money::from_major(current), Money::from_major(previous))
    })
    .collect()
}

pub(super) fn sample_snapshot() -> Snapshot {
    Snapshot {
        categories: sample_categories(),
        income_sources: sample_income(),
        transactions: sample_transactions(),
        monthly_data: sample_monthly_data(),
        savings_goal: Some(SavingsGoal {
            target: Money::from_major(1000),
            current: Money::from_major(644),
            monthly_target: Money::from_major(84),
            monthly_average: Money::from_major(58),
        }),
        category_trends: sample_trends(),
    }
}

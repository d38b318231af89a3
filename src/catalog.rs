use crate::models::{Customer, Product};

/// Read-only menu and customer lookup.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    customers: Vec<Customer>,
}

const MENU: [(u32, &str, &str, i64, &str); 12] = [
    (1, "Sanduíche de Queijo", "Pão fresco com queijo derretido", 550, "sanduiches"),
    (2, "Suco de Laranja", "Suco natural de laranja", 300, "bebidas"),
    (3, "Maçã", "Maçã fresca e crocante", 200, "frutas"),
    (4, "Barra de Cereal", "Barra de cereal com chocolate", 250, "lanches"),
    (5, "Nuggets de Frango", "Porção com 6 nuggets assados", 600, "pratos"),
    (6, "Iogurte de Morango", "Iogurte natural com pedaços de morango", 350, "sobremesas"),
    (7, "Água Mineral", "Garrafa de água mineral sem gás", 200, "bebidas"),
    (8, "Espaguete com Almôndegas", "Espaguete ao molho de tomate com almôndegas", 800, "pratos"),
    (9, "Salada de Frutas", "Mix de frutas frescas picadas", 450, "sobremesas"),
    (10, "Pizza de Queijo", "Fatia de pizza de queijo", 500, "pratos"),
    (11, "Suco de Uva", "Suco natural de uva", 300, "bebidas"),
    (12, "Banana", "Banana fresca", 150, "frutas"),
];

const CUSTOMERS: [(&str, &str); 3] = [
    ("1", "João Silva"),
    ("2", "Maria Oliveira"),
    ("3", "Roberto Pai"),
];

impl Catalog {
    pub fn new(products: Vec<Product>, customers: Vec<Customer>) -> Self {
        Self {
            products,
            customers,
        }
    }

    /// The canteen menu with prices in cents.
    pub fn canteen() -> Self {
        let products = MENU
            .iter()
            .map(|&(id, name, description, price, category)| Product {
                id,
                name: name.to_string(),
                description: description.to_string(),
                price,
                category: category.to_string(),
            })
            .collect();
        let customers = CUSTOMERS
            .iter()
            .map(|&(id, name)| Customer {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect();
        Self::new(products, customers)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn products_in(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .collect()
    }

    pub fn product(&self, id: u32) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn customer(&self, id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }
}

//! Development dataset for UM PARK
//!
//! Fills a fresh database with the content the public site expects: the three
//! plans from the price list, a few services and price items, homepage
//! content, one gallery image and a handful of reservations in each status.
//! Used by the dev-server; tests build their own smaller fixtures.

use crate::{TINY_PNG, TestApp, admin_credentials};
use anyhow::Result;
use jiff::Timestamp;
use payloads::{
    ContentDetails, MembershipDetails, PriceItemDetails, ReservationStatus,
    ServiceDetails, requests, responses,
};
use rust_decimal::dec;

pub struct DevDataset {
    pub memberships: Vec<responses::Membership>,
    pub services: Vec<responses::Service>,
    pub reservations: Vec<payloads::ReservationId>,
}

impl DevDataset {
    /// Creates the dataset. Leaves the client logged in as the admin.
    pub async fn create(app: &TestApp) -> Result<Self> {
        app.time_source.set(Timestamp::now());

        tracing::info!("👤 Creating admin account");
        app.create_admin_user().await?;
        app.client.logout().await?;
        app.client
            .create_account(&requests::CreateAccount {
                email: "eva@example.cz".into(),
                password: "evaheslo".into(),
                full_name: Some("Eva Dvořáková".into()),
            })
            .await?;
        app.login_admin().await?;

        tracing::info!("💳 Creating price list");
        let mut memberships = Vec::new();
        for plan in membership_plans() {
            memberships.push(app.client.create_membership(&plan).await?);
        }
        for item in price_items() {
            app.client.create_price_item(&item).await?;
        }

        tracing::info!("🤸 Creating services");
        let mut services = Vec::new();
        for service in services_list() {
            services.push(app.client.create_service(&service).await?);
        }

        tracing::info!("📝 Creating content and gallery");
        for content in content_blocks() {
            app.client.create_content(&content).await?;
        }
        app.client
            .upload_gallery_image(&requests::CreateGalleryImage {
                title: "Hlavní hala".into(),
                description: Some("Překážková dráha a trampolíny".into()),
                image_data: TINY_PNG.to_vec(),
            })
            .await?;

        tracing::info!("📅 Creating reservations");
        let mut reservations = Vec::new();
        for (name, service, time) in [
            ("Jan Novák", "parkour", "09:00"),
            ("Tereza Malá", "trampoliny", "11:00"),
            ("Petr Svoboda", "akrobacie", "15:00"),
        ] {
            let request = requests::SubmitReservation {
                category: "sport".into(),
                service: service.into(),
                date: app.tomorrow(),
                time: time.into(),
                name: name.into(),
                email: format!(
                    "{}@example.cz",
                    name.split(' ').next().unwrap_or("host").to_lowercase()
                ),
                phone: "+420 777 123 456".into(),
                notes: None,
            };
            reservations.push(app.client.submit_reservation(&request).await?);
        }
        if let [first, second, ..] = reservations.as_slice() {
            app.client
                .set_reservation_status(&requests::SetReservationStatus {
                    id: *first,
                    status: ReservationStatus::Confirmed,
                })
                .await?;
            app.client
                .set_reservation_status(&requests::SetReservationStatus {
                    id: *second,
                    status: ReservationStatus::Cancelled,
                })
                .await?;
        }

        tracing::info!(
            "🔑 Admin login: {} / {}",
            admin_credentials().email,
            admin_credentials().password
        );

        Ok(Self {
            memberships,
            services,
            reservations,
        })
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Development data:");
        for plan in &self.memberships {
            tracing::info!("   💳 {} ({} Kč / {})", plan.name, plan.price, plan.period);
        }
        for service in &self.services {
            tracing::info!(
                "   🤸 {} ({} min, {} Kč)",
                service.name,
                service.duration_minutes,
                service.price
            );
        }
        tracing::info!(
            "   📅 {} reservations (confirmed, cancelled, pending)",
            self.reservations.len()
        );
    }
}

/// The plans shown on the price list page.
pub fn membership_plans() -> Vec<MembershipDetails> {
    vec![
        MembershipDetails {
            name: "Jednorázový vstup".into(),
            price: dec!(200),
            period: "vstup".into(),
            benefits: vec![
                "Vstup na 2 hodiny".into(),
                "Základní vybavení".into(),
                "Společný prostor".into(),
                "Bez rezervace".into(),
            ],
        },
        MembershipDetails {
            name: "Měsíční členství".into(),
            price: dec!(1200),
            period: "měsíc".into(),
            benefits: vec![
                "Neomezený vstup".into(),
                "Veškeré vybavení".into(),
                "Rezervace lekcí".into(),
                "Členské slevy".into(),
                "Osobní skříňka".into(),
            ],
        },
        MembershipDetails {
            name: "10 vstupů".into(),
            price: dec!(1600),
            period: "3 měsíce".into(),
            benefits: vec![
                "10× vstup na 2 hodiny".into(),
                "Platnost 3 měsíce".into(),
                "Veškeré vybavení".into(),
                "Možnost rezervace".into(),
            ],
        },
    ]
}

fn price_items() -> Vec<PriceItemDetails> {
    vec![
        PriceItemDetails {
            title: "Trampolíny".into(),
            price: dec!(150),
            duration: "1 hodina".into(),
            description: "Volné skákání pod dohledem trenéra".into(),
        },
        PriceItemDetails {
            title: "Dětská oslava".into(),
            price: dec!(3500),
            duration: "3 hodiny".into(),
            description: "Program, občerstvení a hala jen pro vás".into(),
        },
    ]
}

fn services_list() -> Vec<ServiceDetails> {
    vec![
        ServiceDetails {
            name: "Parkour lekce".into(),
            description: "Skupinová lekce s trenérem".into(),
            duration_minutes: 90,
            price: dec!(250),
        },
        ServiceDetails {
            name: "Osobní trénink".into(),
            description: "Individuální plán a vedení".into(),
            duration_minutes: 60,
            price: dec!(600),
        },
    ]
}

fn content_blocks() -> Vec<ContentDetails> {
    vec![
        ContentDetails {
            title: "Novinky".into(),
            body: "Od září otevíráme **nové kurzy** pro děti i dospělé.".into(),
        },
        ContentDetails {
            title: "Provozní řád".into(),
            body: "- Vstup jen v čisté obuvi\n- Děti do 12 let s doprovodem"
                .into(),
        },
    ]
}

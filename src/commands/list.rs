//! List site content

use anyhow::Result;

use crate::Site;

fn label(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("(untitled)")
}

fn order(value: Option<f64>) -> String {
    value.map(|o| o.to_string()).unwrap_or_else(|| "-".to_string())
}

/// List site content by type
pub async fn run(site: &Site, content_type: &str) -> Result<()> {
    let loader = site.loader();

    match content_type {
        "service" | "services" => {
            let services = loader.load_services().await;
            println!("Services ({}):", services.len());
            for s in services {
                let star = if s.featured == Some(true) { " *" } else { "" };
                println!("  [{}] {}{}", order(s.order), label(&s.title), star);
            }
        }
        "feature" | "features" => {
            let features = loader.load_features().await;
            println!("Features ({}):", features.len());
            for f in features {
                println!("  [{}] {} ({})", order(f.order), label(&f.title), label(&f.icon));
            }
        }
        "testimonial" | "testimonials" => {
            let testimonials = loader.load_testimonials().await;
            println!("Testimonials ({}):", testimonials.len());
            for t in testimonials {
                println!("  {} - {}", label(&t.name), label(&t.service_type));
            }
        }
        "preservation" => {
            let packages = loader.load_preservation().await;
            println!("Preservation packages ({}):", packages.len());
            for p in packages {
                println!("  [{}] {} {}", order(p.order), label(&p.title), label(&p.price));
            }
        }
        "cta" | "ctas" => {
            let ctas = loader.load_cta_sections().await;
            println!("Calls to action ({}):", ctas.len());
            for c in ctas {
                println!("  {} -> {}", label(&c.title), label(&c.primary_button_link));
            }
        }
        "gallery" => {
            let items = loader.load_gallery_items().await;
            println!("Gallery ({}):", items.len());
            for g in items {
                println!("  [{}] {} ({})", order(g.order), label(&g.title), label(&g.category));
            }
        }
        "review" | "reviews" => {
            super::reviews::run(site, false).await?;
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: services, features, testimonials, preservation, cta, gallery, reviews",
                content_type
            );
        }
    }

    Ok(())
}

use anyhow::{Context, Result};

/// One generated catalogue row.
struct SampleOffer {
    category: &'static str,
    country: &'static str,
    kind: &'static str,
    name: &'static str,
    price: i64,
}

const OFFERS: &[SampleOffer] = &[
    SampleOffer { category: "Fleurs", country: "Espagne", kind: "Indoor", name: "GreenValley SL", price: 1800 },
    SampleOffer { category: "Fleurs", country: "Espagne", kind: "Greenhouse", name: "Iberia Garden", price: 1100 },
    SampleOffer { category: "Fleurs", country: "Suisse", kind: "Indoor", name: "Alpine Buds AG", price: 2400 },
    SampleOffer { category: "Fleurs", country: "Italie", kind: "Outdoor", name: "Verde Sud", price: 700 },
    SampleOffer { category: "Fleurs", country: "France", kind: "Greenhouse", name: "Chanvre & Co", price: 1350 },
    SampleOffer { category: "Extraits", country: "Suisse", kind: "Distillat", name: "Helvetic Labs", price: 3200 },
    SampleOffer { category: "Extraits", country: "Espagne", kind: "Rosin", name: "Prensa Dorada", price: 4500 },
    SampleOffer { category: "Extraits", country: "France", kind: "Crumble", name: "Extraction Bleue", price: 2900 },
    SampleOffer { category: "Comestibles", country: "France", kind: "Gummies", name: "Douceurs Vertes", price: 9 },
    SampleOffer { category: "Comestibles", country: "Italie", kind: "Chocolat", name: "Cioccolato Verde", price: 14 },
    SampleOffer { category: "Comestibles", country: "Espagne", kind: "Gummies", name: "Gominolas Plus", price: 7 },
    SampleOffer { category: "Vape", country: "France", kind: "Cartouche", name: "VapoLab", price: 18 },
    SampleOffer { category: "Vape", country: "Suisse", kind: "Disposable", name: "Puff Helvetia", price: 22 },
    SampleOffer { category: "Vape", country: "Italie", kind: "Cartouche", name: "Nebbia Vape", price: 16 },
];

/// Write a sample `data.csv` in the layout the viewer expects:
/// `;`-delimited with French headers.
fn main() -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path("data.csv")
        .context("creating data.csv")?;

    writer
        .write_record(["Categorie", "Pays", "Type", "Nom", "Prix", "Lien"])
        .context("writing header")?;

    for offer in OFFERS {
        let slug = offer.name.to_lowercase().replace([' ', '&'], "-");
        writer
            .write_record([
                offer.category,
                offer.country,
                offer.kind,
                offer.name,
                &offer.price.to_string(),
                &format!("https://catalogue.example.com/{slug}"),
            ])
            .context("writing offer row")?;
    }

    writer.flush().context("flushing data.csv")?;
    println!("Wrote {} offers to data.csv", OFFERS.len());
    Ok(())
}

use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use starwars_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{Characters, Films, Planets, characters, films, planets},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    seed_characters(&orm).await?;
    seed_planets(&orm).await?;
    seed_films(&orm).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_characters(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let rows = [
        ("Luke Skywalker", "blue", "blond"),
        ("Leia Organa", "brown", "brown"),
        ("Han Solo", "brown", "brown"),
        ("Darth Vader", "yellow", "none"),
        ("Obi-Wan Kenobi", "blue-gray", "auburn, white"),
    ];

    let mut inserted = 0;
    for (name, eye_color, hair_color) in rows {
        let exists = Characters::find()
            .filter(characters::Column::Name.eq(name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        characters::ActiveModel {
            id: NotSet,
            name: Set(name.into()),
            eye_color: Set(eye_color.into()),
            hair_color: Set(hair_color.into()),
        }
        .insert(orm)
        .await?;
        inserted += 1;
    }

    println!("Seeded characters ({inserted} new)");
    Ok(())
}

async fn seed_planets(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let rows = [
        ("Tatooine", "1 standard", "arid", "200000", "23"),
        ("Alderaan", "1 standard", "temperate", "2000000000", "24"),
        ("Hoth", "1.1 standard", "frozen", "unknown", "23"),
        ("Dagobah", "N/A", "murky", "unknown", "23"),
    ];

    let mut inserted = 0;
    for (name, gravity, climate, population, rotation_period) in rows {
        let exists = Planets::find()
            .filter(planets::Column::Name.eq(name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        planets::ActiveModel {
            id: NotSet,
            name: Set(name.into()),
            gravity: Set(gravity.into()),
            climate: Set(climate.into()),
            population: Set(population.into()),
            rotation_period: Set(rotation_period.into()),
        }
        .insert(orm)
        .await?;
        inserted += 1;
    }

    println!("Seeded planets ({inserted} new)");
    Ok(())
}

async fn seed_films(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let rows = [
        (
            "A New Hope",
            "2014-12-10T14:23:31.880000Z",
            "2014-12-20T19:49:45.256000Z",
            "Gary Kurtz, Rick McCallum",
            "Episode IV",
            "George Lucas",
        ),
        (
            "The Empire Strikes Back",
            "2014-12-12T11:26:24.656000Z",
            "2014-12-15T13:07:53.386000Z",
            "Gary Kurtz, Rick McCallum",
            "Episode V",
            "Irvin Kershner",
        ),
        (
            "Return of the Jedi",
            "2014-12-18T10:39:33.255000Z",
            "2014-12-20T09:48:37.462000Z",
            "Howard G. Kazanjian, George Lucas, Rick McCallum",
            "Episode VI",
            "Richard Marquand",
        ),
    ];

    let mut inserted = 0;
    for (name, created, edited, producer, title, director) in rows {
        let exists = Films::find()
            .filter(films::Column::Name.eq(name))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }
        films::ActiveModel {
            id: NotSet,
            name: Set(name.into()),
            created: Set(created.into()),
            edited: Set(edited.into()),
            producer: Set(producer.into()),
            title: Set(title.into()),
            director: Set(director.into()),
        }
        .insert(orm)
        .await?;
        inserted += 1;
    }

    println!("Seeded films ({inserted} new)");
    Ok(())
}

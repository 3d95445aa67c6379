//! Create the schema and load the demo roster. Pure fixture loading; every
//! rule stays in the service layer, so an invalid fixture aborts the run.
use anyhow::Result;
use dotenvy::dotenv;
use migration::MigratorTrait;
use sea_orm::EntityTrait;
use tracing::info;

use service::activity_service::{create_activity, ActivityInput};
use service::camper_service::{create_camper, CamperInput};
use service::signup_service::{create_signup, SignupInput};

fn camper(name: &str, age: i32) -> CamperInput {
    CamperInput { name: Some(Some(name.to_string())), age: Some(Some(age)) }
}

fn activity(name: &str, difficulty: i32) -> ActivityInput {
    ActivityInput {
        name: Some(Some(name.to_string())),
        difficulty: Some(Some(difficulty)),
    }
}

fn signup(camper_id: i32, activity_id: i32, time: i32) -> SignupInput {
    SignupInput {
        camper_id: Some(Some(camper_id)),
        activity_id: Some(Some(activity_id)),
        time: Some(Some(time)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    common::utils::logging::init_logging_default();

    let db = models::db::connect().await?;
    migration::Migrator::up(&db, None).await?;

    // Clear existing data, children first
    models::signup::Entity::delete_many().exec(&db).await?;
    models::activity::Entity::delete_many().exec(&db).await?;
    models::camper::Entity::delete_many().exec(&db).await?;

    let campers = [
        camper("Caitlin", 8),
        camper("Lizzie", 9),
        camper("Nicholas Martinez", 12),
        camper("Ashley Delgado", 11),
        camper("Zoe", 11),
        camper("some name", 10),
    ];
    let mut camper_ids = Vec::with_capacity(campers.len());
    for input in campers {
        camper_ids.push(create_camper(&db, input).await?.id);
    }

    let activities = [
        activity("Archery", 2),
        activity("Swimming", 3),
        activity("Swim in the lake.", 3),
        activity("Hiking by the stream.", 2),
        activity("Listening to the birds chirp.", 1),
        activity("Kayaking", 4),
        activity("Rock Climbing", 5),
        activity("Nature Walk", 1),
    ];
    let mut activity_ids = Vec::with_capacity(activities.len());
    for input in activities {
        activity_ids.push(create_activity(&db, input).await?.id);
    }

    let signups = [
        signup(camper_ids[2], activity_ids[3], 8),
        signup(camper_ids[2], activity_ids[4], 1),
        signup(camper_ids[3], activity_ids[2], 9),
        signup(camper_ids[0], activity_ids[0], 10),
        signup(camper_ids[1], activity_ids[7], 11),
        signup(camper_ids[4], activity_ids[5], 14),
    ];
    let signup_count = signups.len();
    for input in signups {
        create_signup(&db, input).await?;
    }

    info!(
        campers = camper_ids.len(),
        activities = activity_ids.len(),
        signups = signup_count,
        "database seeded"
    );
    Ok(())
}

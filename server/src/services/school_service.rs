use crate::db::repositories::SchoolStore;
use crate::error::AppResult;
use crate::models::{NewSchool, School, SchoolWithDistance};
use crate::utils::geo::Coordinates;
use log::{debug, info};
use std::cmp::Ordering;
use std::sync::Arc;

/// Annotates each school with its distance from `origin` and sorts ascending.
///
/// The sort is stable, so schools at equal distance keep their input order.
/// NaN distances sort last.
pub fn rank_by_distance(schools: Vec<School>, origin: Coordinates) -> Vec<SchoolWithDistance> {
    let mut ranked: Vec<SchoolWithDistance> = schools
        .into_iter()
        .map(|school| {
            let distance = origin.distance_to(&Coordinates::new(school.latitude, school.longitude));
            SchoolWithDistance { school, distance }
        })
        .collect();

    ranked.sort_by(|a, b| {
        a.distance
            .is_nan()
            .cmp(&b.distance.is_nan())
            .then_with(|| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal))
    });
    ranked
}

#[derive(Clone)]
pub struct SchoolService {
    store: Arc<dyn SchoolStore>,
}

impl SchoolService {
    pub fn new(store: Arc<dyn SchoolStore>) -> Self {
        Self { store }
    }

    pub async fn add_school(&self, school: NewSchool) -> AppResult<i64> {
        let name = school.name.clone();
        let id = self.store.create(school).await?;
        info!("Added school {} ('{}')", id, name);
        Ok(id)
    }

    pub async fn list_schools_by_distance(
        &self,
        origin: Coordinates,
    ) -> AppResult<Vec<SchoolWithDistance>> {
        let schools = self.store.list_all().await?;
        debug!(
            "Ranking {} schools from ({}, {})",
            schools.len(),
            origin.latitude,
            origin.longitude
        );
        Ok(rank_by_distance(schools, origin))
    }

    pub async fn delete_all_schools(&self) -> AppResult<u64> {
        let affected = self.store.delete_all().await?;
        info!("Deleted {} school records", affected);
        Ok(affected)
    }

    pub async fn database_available(&self) -> bool {
        self.store.ping().await.is_ok()
    }
}

//! Repositorio de vehículos
//!
//! Listado paginado con QueryBuilder y escrituras transaccionales: la marca,
//! el modelo y la finition se buscan por nombre y se crean si no existen.

use chrono::NaiveDate;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};
use tracing::debug;

use crate::dto::vehicle_dto::VehicleListParams;
use crate::models::vehicle::{VehicleRequest, VehicleRow};
use crate::utils::errors::AppError;

const SELECT_VEHICLE_ROW: &str = r#"
    SELECT v.id, v.created_at, v.vin, v.year,
           v.brand_id, b.name AS brand_name,
           v.model_id, m.name AS model_name,
           v.trim_level_id, t.name AS trim_level_name,
           v.description, v.image_path
    FROM vehicles v
    JOIN brands b ON b.id = v.brand_id
    JOIN models m ON m.id = v.model_id
    LEFT JOIN trim_levels t ON t.id = v.trim_level_id
"#;

const COUNT_VEHICLES: &str = r#"
    SELECT COUNT(*)
    FROM vehicles v
    JOIN brands b ON b.id = v.brand_id
"#;

/// Ids del catálogo resueltos para un vehículo
#[derive(Debug, Clone, Copy, PartialEq)]
struct CatalogIds {
    brand_id: i32,
    model_id: i32,
    trim_level_id: Option<i32>,
}

/// Escapa los comodines de LIKE para buscar el texto literal
pub fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, params: &VehicleListParams) {
    if let Some(brand) = &params.brand {
        builder
            .push(" WHERE b.name ILIKE ")
            .push_bind(format!("%{}%", escape_like(brand)));
    }
}

/// Consulta de una página del listado
pub fn build_list_query(params: &VehicleListParams) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(SELECT_VEHICLE_ROW);
    push_filters(&mut builder, params);
    builder
        .push(" ORDER BY ")
        .push(params.sort_order.order_by_clause())
        .push(" LIMIT ")
        .push_bind(params.page_size)
        .push(" OFFSET ")
        .push_bind(params.offset());
    builder
}

/// Consulta del total de elementos del listado
pub fn build_count_query(params: &VehicleListParams) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(COUNT_VEHICLES);
    push_filters(&mut builder, params);
    builder
}

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Página de vehículos y total de elementos que cumplen el filtro
    pub async fn list(&self, params: &VehicleListParams) -> Result<(Vec<VehicleRow>, i64), AppError> {
        let total: i64 = build_count_query(params)
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        let vehicles = build_list_query(params)
            .build_query_as::<VehicleRow>()
            .fetch_all(&self.pool)
            .await?;

        debug!(
            "🚗 Página {} de vehículos ({} de {})",
            params.page_number,
            vehicles.len(),
            total
        );

        Ok((vehicles, total))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<VehicleRow>, AppError> {
        let vehicle = sqlx::query_as::<_, VehicleRow>(&format!("{} WHERE v.id = $1", SELECT_VEHICLE_ROW))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<VehicleRow>, AppError> {
        let vehicles = sqlx::query_as::<_, VehicleRow>(&format!(
            "{} WHERE v.id = ANY($1) ORDER BY v.id",
            SELECT_VEHICLE_ROW
        ))
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    pub async fn exists(&self, id: i32) -> Result<bool, AppError> {
        let result: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM vehicles WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(result.0)
    }

    /// Vehículos en venta: disponibles a `today` y todavía sin fecha de venta
    pub async fn find_advertised(&self, today: NaiveDate) -> Result<Vec<VehicleRow>, AppError> {
        let vehicles = sqlx::query_as::<_, VehicleRow>(&format!(
            r#"{}
            JOIN sales s ON s.vehicle_id = v.id
            WHERE s.availability_date <= $1 AND s.sale_date IS NULL
            ORDER BY s.availability_date DESC, v.id DESC"#,
            SELECT_VEHICLE_ROW
        ))
        .bind(today)
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    /// Crear un vehículo resolviendo su catálogo en la misma transacción
    pub async fn create(&self, request: &VehicleRequest) -> Result<i32, AppError> {
        let mut tx = self.pool.begin().await?;
        let id = insert_vehicle(&mut tx, request).await?;
        tx.commit().await?;

        Ok(id)
    }

    /// Crear varios vehículos; si uno falla no se crea ninguno
    pub async fn create_many(&self, requests: &[VehicleRequest]) -> Result<Vec<i32>, AppError> {
        let mut tx = self.pool.begin().await?;
        let mut ids = Vec::with_capacity(requests.len());
        for request in requests {
            ids.push(insert_vehicle(&mut tx, request).await?);
        }
        tx.commit().await?;

        Ok(ids)
    }

    /// Reemplazar un vehículo; `false` si no existe
    pub async fn update(&self, id: i32, request: &VehicleRequest) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;
        let catalog = resolve_catalog(&mut tx, request).await?;

        let updated: Option<(i32,)> = sqlx::query_as(
            r#"
            UPDATE vehicles
            SET vin = $2, year = $3, brand_id = $4, model_id = $5, trim_level_id = $6,
                description = $7, image_path = $8
            WHERE id = $1
            RETURNING id
            "#,
        )
        .bind(id)
        .bind(request.vin.as_deref())
        .bind(request.year)
        .bind(catalog.brand_id)
        .bind(catalog.model_id)
        .bind(catalog.trim_level_id)
        .bind(request.description.as_deref())
        .bind(request.image_path.as_deref())
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }

    /// Borra el vehículo con sus reparaciones, compra y venta
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

async fn insert_vehicle(conn: &mut PgConnection, request: &VehicleRequest) -> Result<i32, AppError> {
    let catalog = resolve_catalog(conn, request).await?;

    let (id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO vehicles (vin, year, brand_id, model_id, trim_level_id, description, image_path)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id
        "#,
    )
    .bind(request.vin.as_deref())
    .bind(request.year)
    .bind(catalog.brand_id)
    .bind(catalog.model_id)
    .bind(catalog.trim_level_id)
    .bind(request.description.as_deref())
    .bind(request.image_path.as_deref())
    .fetch_one(&mut *conn)
    .await?;

    Ok(id)
}

async fn resolve_catalog(conn: &mut PgConnection, request: &VehicleRequest) -> Result<CatalogIds, AppError> {
    let (brand_id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO brands (name) VALUES ($1)
        ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id
        "#,
    )
    .bind(request.brand_name())
    .fetch_one(&mut *conn)
    .await?;

    let (model_id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO models (brand_id, name) VALUES ($1, $2)
        ON CONFLICT (brand_id, name) DO UPDATE SET name = EXCLUDED.name
        RETURNING id
        "#,
    )
    .bind(brand_id)
    .bind(request.model_name())
    .fetch_one(&mut *conn)
    .await?;

    let trim_level_id = match request.trim_level_name() {
        Some(name) => {
            let (id,): (i32,) = sqlx::query_as(
                r#"
                INSERT INTO trim_levels (model_id, name) VALUES ($1, $2)
                ON CONFLICT (model_id, name) DO UPDATE SET name = EXCLUDED.name
                RETURNING id
                "#,
            )
            .bind(model_id)
            .bind(name)
            .fetch_one(&mut *conn)
            .await?;
            Some(id)
        }
        None => None,
    };

    Ok(CatalogIds {
        brand_id,
        model_id,
        trim_level_id,
    })
}

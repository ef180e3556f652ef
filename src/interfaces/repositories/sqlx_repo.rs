use sqlx::PgPool;

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxSkillRepo {
    pub pool: PgPool,
}

#[derive(Clone)]
pub struct SqlxContactMessageRepo {
    pub pool: PgPool,
}

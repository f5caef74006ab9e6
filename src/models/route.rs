// ============================================================================
// ROUTE TABLE - Hash del URL -> ruta del servidor
// ============================================================================
// Conjunto cerrado: cualquier hash desconocido o vacío cae en Dashboard
// ============================================================================

use serde::{Deserialize, Serialize};

/// Vistas del panel admin accesibles por hash
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    #[default]
    Dashboard,
    StudentsViewAll,
    StudentManageLogin,
    TeachersViewAll,
    TeacherManageLogin,
    Attendance,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Dashboard,
        Route::StudentsViewAll,
        Route::StudentManageLogin,
        Route::TeachersViewAll,
        Route::TeacherManageLogin,
        Route::Attendance,
    ];

    /// Resolver un hash (`#attendance`, `attendance`, `""`) a su ruta.
    /// Total: nunca falla, lo desconocido va al dashboard.
    pub fn from_hash(hash: &str) -> Route {
        let key = hash.strip_prefix('#').unwrap_or(hash);
        Route::ALL
            .into_iter()
            .find(|route| route.link_key() == key)
            .unwrap_or(Route::Dashboard)
    }

    /// Ruta del servidor que devuelve el fragmento HTML
    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::StudentsViewAll => "/students",
            Route::StudentManageLogin => "/students-login",
            Route::TeachersViewAll => "/teachers",
            Route::TeacherManageLogin => "/teachers-login",
            Route::Attendance => "/attendance",
        }
    }

    /// Valor de `data-link` del link de navegación
    pub fn link_key(self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            Route::StudentsViewAll => "students-view-all",
            Route::StudentManageLogin => "student-manage-login",
            Route::TeachersViewAll => "teachers-view-all",
            Route::TeacherManageLogin => "teacher-manage-login",
            Route::Attendance => "attendance",
        }
    }

    pub fn hash(self) -> &'static str {
        match self {
            Route::Dashboard => "#dashboard",
            Route::StudentsViewAll => "#students-view-all",
            Route::StudentManageLogin => "#student-manage-login",
            Route::TeachersViewAll => "#teachers-view-all",
            Route::TeacherManageLogin => "#teacher-manage-login",
            Route::Attendance => "#attendance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_hashes_map_to_fixed_paths() {
        let table = [
            ("#students-view-all", "/students"),
            ("#student-manage-login", "/students-login"),
            ("#teachers-view-all", "/teachers"),
            ("#teacher-manage-login", "/teachers-login"),
            ("#attendance", "/attendance"),
            ("#dashboard", "/dashboard"),
        ];
        for (hash, path) in table {
            assert_eq!(Route::from_hash(hash).path(), path, "hash {hash}");
        }
    }

    #[test]
    fn empty_and_unknown_hashes_fall_back_to_dashboard() {
        for hash in ["", "#", "#nope", "#Attendance", "#attendance/", "students"] {
            assert_eq!(Route::from_hash(hash), Route::Dashboard, "hash {hash:?}");
        }
    }

    #[test]
    fn leading_hash_is_optional() {
        assert_eq!(Route::from_hash("attendance"), Route::Attendance);
    }

    #[test]
    fn canonical_hash_resolves_back() {
        for route in Route::ALL {
            assert_eq!(Route::from_hash(route.hash()), route);
            assert_eq!(&route.hash()[1..], route.link_key());
        }
    }
}

//! Resource kinds listed by the console and the columns each page shows.

use crate::listing::Column;

#[derive(Debug, PartialEq, Eq)]
pub struct Resource {
    pub title: &'static str,
    /// API path, relative to `API_BASE`.
    pub endpoint: &'static str,
    pub columns: &'static [Column],
}

const fn col(key: &'static str, title: &'static str) -> Column {
    Column { key, title }
}

pub static DEVICES: Resource = Resource {
    title: "Perangkat",
    endpoint: "/devices",
    columns: &[
        col("serialNumber", "Nomor Seri"),
        col("name", "Nama"),
        col("deviceType.name", "Tipe"),
        col("project.name", "Proyek"),
        col("status", "Status"),
    ],
};

pub static DEVICE_TYPES: Resource = Resource {
    title: "Tipe Perangkat",
    endpoint: "/device-types",
    columns: &[col("name", "Nama"), col("description", "Deskripsi")],
};

pub static COMPANIES: Resource = Resource {
    title: "Perusahaan",
    endpoint: "/companies",
    columns: &[col("name", "Nama"), col("address", "Alamat"), col("phone", "Telepon")],
};

pub static PROJECTS: Resource = Resource {
    title: "Proyek",
    endpoint: "/projects",
    columns: &[col("name", "Nama"), col("company.name", "Perusahaan"), col("location", "Lokasi")],
};

pub static ACCESS_RULES: Resource = Resource {
    title: "Aturan Akses",
    endpoint: "/access-rules",
    columns: &[col("user.username", "Pengguna"), col("project.name", "Proyek"), col("permission", "Izin")],
};

pub static REPORTS: Resource = Resource {
    title: "Laporan",
    endpoint: "/reports",
    columns: &[
        col("device.name", "Perangkat"),
        col("createdAt", "Waktu"),
        col("type", "Jenis"),
        col("message", "Pesan"),
    ],
};

pub static USERS: Resource = Resource {
    title: "Pengguna",
    endpoint: "/users",
    columns: &[col("username", "Nama Pengguna"), col("email", "Email"), col("role", "Peran")],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_resource_has_columns_and_a_rooted_endpoint() {
        for r in [&DEVICES, &DEVICE_TYPES, &COMPANIES, &PROJECTS, &ACCESS_RULES, &REPORTS, &USERS] {
            assert!(r.endpoint.starts_with('/'), "{}", r.title);
            assert!(!r.columns.is_empty(), "{}", r.title);
        }
    }
}

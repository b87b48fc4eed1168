mod account_details;
mod add_plant_to_user;
mod catalog;
mod change_user_password;
mod dashboard;
mod error;
mod forgot_password;
mod garden_detail;
pub mod login;
mod manage_admins;
mod manage_users;
mod my_gardens;
mod my_plants;
mod plant_detail;
mod sign_up_admin;
mod sign_up_user;

pub use account_details::AccountDetailsPage;
pub use add_plant_to_user::AddPlantToUserPage;
pub use catalog::CatalogPage;
pub use change_user_password::ChangeUserPasswordPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use forgot_password::ForgotPasswordPage;
pub use garden_detail::GardenDetailPage;
pub use login::LoginPage;
pub use manage_admins::ManageAdminsPage;
pub use manage_users::ManageUsersPage;
pub use my_gardens::MyGardensPage;
pub use my_plants::MyPlantsPage;
pub use plant_detail::PlantDetailPage;
pub use sign_up_admin::SignUpAdminPage;
pub use sign_up_user::SignUpUserPage;

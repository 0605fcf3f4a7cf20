//! Application shell state: which view is showing, who is signed in, and
//! the lifecycle of the two registration wizards.

use crate::flows::{MaterialSupplierForm, Registration, VehicleOwnerForm};
use crate::session::{Partner, User};
use crate::wizard::Wizard;

/// Every top-level view the front end can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Vehicles,
    Materials,
    About,
    Contact,
    SignUp,
    Confirmation,
    Dashboard,
    VehicleDetails,
    Profile,
    PartnerDashboard,
}

/// Where the user lands after acknowledging the confirmation page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationAction {
    Home,
    Dashboard,
}

/// Shell state driving navigation, session and the registration wizards.
///
/// At most one wizard of each flow exists at a time. Opening a wizard always
/// starts it fresh; closing or submitting it drops the record and with it
/// every attachment it held.
#[derive(Default)]
pub struct AppState {
    pub view: View,
    pub user: Option<User>,
    pub partner: Option<Partner>,
    pub menu_open: bool,
    pub auth_modal_open: bool,
    vehicle_wizard: Option<Wizard<VehicleOwnerForm>>,
    material_wizard: Option<Wizard<MaterialSupplierForm>>,
    pending_registration: Option<Registration>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch views, closing the mobile menu if it was open.
    pub fn navigate(&mut self, view: View) {
        self.view = view;
        self.menu_open = false;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn show_auth_modal(&mut self) {
        self.auth_modal_open = true;
    }

    pub fn close_auth_modal(&mut self) {
        self.auth_modal_open = false;
    }

    /// Sign in and land on the dashboard.
    pub fn login(&mut self, user: User) {
        tracing::info!(email = %user.email, "user signed in");
        self.user = Some(user);
        self.auth_modal_open = false;
        self.view = View::Dashboard;
    }

    /// Sign out, dropping the partner profile too.
    pub fn logout(&mut self) {
        self.user = None;
        self.partner = None;
        self.view = View::Home;
    }

    /// Open the vehicle owner wizard on step 1 with an empty record,
    /// replacing any earlier attempt.
    pub fn open_vehicle_registration(&mut self) -> &mut Wizard<VehicleOwnerForm> {
        self.vehicle_wizard.insert(Wizard::new())
    }

    /// Open the material supplier wizard on step 1 with an empty record.
    pub fn open_material_registration(&mut self) -> &mut Wizard<MaterialSupplierForm> {
        self.material_wizard.insert(Wizard::new())
    }

    pub fn vehicle_registration(&mut self) -> Option<&mut Wizard<VehicleOwnerForm>> {
        self.vehicle_wizard.as_mut()
    }

    pub fn material_registration(&mut self) -> Option<&mut Wizard<MaterialSupplierForm>> {
        self.material_wizard.as_mut()
    }

    /// Abandon the vehicle owner wizard, releasing its attachments.
    pub fn close_vehicle_registration(&mut self) {
        self.vehicle_wizard = None;
    }

    /// Abandon the material supplier wizard, releasing its attachments.
    pub fn close_material_registration(&mut self) {
        self.material_wizard = None;
    }

    /// Submit the open vehicle owner wizard. On success the wizard is gone
    /// and the confirmation page shows; on failure it stays open with its
    /// errors recorded.
    pub fn submit_vehicle_registration(&mut self) -> bool {
        let Some(wizard) = self.vehicle_wizard.as_mut() else {
            return false;
        };
        match wizard.submit() {
            Ok(record) => {
                self.vehicle_wizard = None;
                self.complete_registration(record);
                true
            }
            Err(_) => false,
        }
    }

    /// Submit the open material supplier wizard.
    pub fn submit_material_registration(&mut self) -> bool {
        let Some(wizard) = self.material_wizard.as_mut() else {
            return false;
        };
        match wizard.submit() {
            Ok(record) => {
                self.material_wizard = None;
                self.complete_registration(record);
                true
            }
            Err(_) => false,
        }
    }

    fn complete_registration(&mut self, record: Registration) {
        tracing::info!(role = record.role(), "registration completed");
        self.pending_registration = Some(record);
        self.view = View::Confirmation;
    }

    /// The record awaiting acknowledgement on the confirmation page.
    pub fn pending_registration(&self) -> Option<&Registration> {
        self.pending_registration.as_ref()
    }

    /// Leave the confirmation page. Going to the dashboard signs the new
    /// account in and, for business roles, creates the pending partner
    /// profile; going home discards nothing but the pending record.
    pub fn confirm(&mut self, action: ConfirmationAction) {
        let Some(record) = self.pending_registration.take() else {
            self.view = View::Home;
            return;
        };

        match action {
            ConfirmationAction::Home => {
                self.view = View::Home;
            }
            ConfirmationAction::Dashboard => {
                self.user = Some(User::from_registration(&record));
                self.partner = Partner::from_registration(&record);
                self.view = if self.partner.is_some() {
                    View::PartnerDashboard
                } else {
                    View::Dashboard
                };
            }
        }
    }

    /// Merge edited contact details into the signed-in account.
    pub fn update_profile(&mut self, name: Option<String>, phone: Option<String>) {
        if let Some(user) = self.user.as_mut() {
            if let Some(name) = name {
                user.name = name;
            }
            if let Some(phone) = phone {
                user.phone = phone;
            }
        }
    }
}

use panel::{Html, View};

use super::page;

/// Profile form of the signed-in user.
#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateProfile;

impl View for UpdateProfile {
    fn render(&self) -> Html {
        page(
            "Profile",
            r#"<div class="row"><div class="col-md-3"><div class="card card-primary card-outline"><div class="card-body box-profile"><h3 class="profile-username text-center">Admin</h3><p class="text-muted text-center">Administrator</p></div></div></div><div class="col-md-9"><div class="card"><div class="card-header p-2"><ul class="nav nav-pills"><li class="nav-item"><span class="nav-link active">Edit Profile</span></li><li class="nav-item"><span class="nav-link">Change Password</span></li></ul></div><div class="card-body"><form class="form-horizontal"><div class="form-group row"><label for="inputName" class="col-sm-2 col-form-label">Name</label><div class="col-sm-10"><input type="text" class="form-control" id="inputName" placeholder="Name" /></div></div><div class="form-group row"><label for="inputEmail" class="col-sm-2 col-form-label">Email</label><div class="col-sm-10"><input type="email" class="form-control" id="inputEmail" placeholder="Email" /></div></div><div class="form-group row"><div class="offset-sm-2 col-sm-10"><button type="submit" class="btn btn-success"><i class="fa fa-save mr-1"></i>Save Profile</button></div></div></form></div></div></div></div>"#,
        )
    }
}
